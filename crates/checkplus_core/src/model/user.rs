//! User account model.
//!
//! # Responsibility
//! - Define the registry record created at registration.
//!
//! # Invariants
//! - `id` is stable and never reused for another account.
//! - `password_hash` holds an Argon2 PHC-format string, never plaintext.
//! - Email uniqueness is enforced at registration time only.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stable identifier for a registered account.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Registry record for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account id, also used to namespace per-user storage keys.
    pub id: UserId,
    pub name: String,
    /// Login identifier; unique within the registry at registration time.
    pub email: String,
    /// Argon2id hash in PHC format.
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Creates a new account record with a generated stable id.
    ///
    /// The caller provides an already-hashed password; this constructor never
    /// sees plaintext credentials.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
