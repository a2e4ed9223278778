//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the synchronous key-value contract the session layer writes
//!   through.
//! - Isolate SQLite details from session/service orchestration.
//!
//! # Invariants
//! - Writes replace the whole stored value; there are no partial updates.
//! - The store has no locking discipline; single-writer-at-a-time is assumed
//!   by convention, not enforced.

pub mod kv_repo;
