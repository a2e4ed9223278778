//! Entity stores driving each screen.
//!
//! # Responsibility
//! - Implement the load/add/update/remove pattern shared by checklists,
//!   post-its and calendar events.
//! - Keep screen controllers decoupled from storage details.
//!
//! # Invariants
//! - Every mutation replaces and persists the entire collection.
//! - First load without persisted data returns the seed default and does not
//!   persist it until the first mutation.

pub mod calendar_service;
pub mod checklist_service;
pub mod postit_service;
