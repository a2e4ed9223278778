//! Password hashing and verification (Argon2id).
//!
//! # Responsibility
//! - Hash registration passwords into PHC-format strings.
//! - Verify login attempts against stored hashes.
//!
//! # Invariants
//! - Hashing uses a fresh random salt per call.
//! - A malformed stored hash verifies as a mismatch, never as a panic.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to produce a password hash.
#[derive(Debug)]
pub struct PasswordHashError(String);

impl Display for PasswordHashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to hash password: {}", self.0)
    }
}

impl Error for PasswordHashError {}

/// Hashes a plaintext password with default Argon2id parameters.
///
/// Returns a PHC-format string suitable for `User::password_hash`.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| PasswordHashError(err.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a PHC-format hash.
///
/// A hash that fails to parse counts as a mismatch so that corrupted
/// registry entries surface as `InvalidCredentials` rather than a crash.
pub fn verify_password(password: &str, phc_hash: &str) -> bool {
    let parsed = match PasswordHash::new(phc_hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("event=password_verify module=session status=error error_code=malformed_hash error={err}");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
