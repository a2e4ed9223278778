//! Domain model for the Check+ productivity core.
//!
//! # Responsibility
//! - Define the canonical data structures persisted per user.
//! - Provide the seed collections returned before any data is persisted.
//!
//! # Invariants
//! - Entity item ids are epoch-millisecond timestamps (stable once created).
//! - Seed collections are pure values; loading a seed never writes storage.

pub mod checklist;
pub mod event;
pub mod postit;
pub mod user;
