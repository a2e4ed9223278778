//! Session lifecycle and per-user namespaced persistence.
//!
//! # Responsibility
//! - Own the current-user identity and the login/logout/register flows.
//! - Expose per-user namespaced get/set over the key-value store.
//!
//! # Invariants
//! - Exactly one session may be active per manager at a time.
//! - Credentials are stored as Argon2 hashes, never plaintext.
//! - Without an active session, data reads return absent and writes are
//!   silent no-ops.

pub mod manager;
pub mod password;
