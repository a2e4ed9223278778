//! Session manager: authentication flows and namespaced user data access.
//!
//! # Responsibility
//! - Drive register/login/logout against the persisted user registry.
//! - Restore the previous session on construction.
//! - Namespace all entity reads/writes under the active user's id.
//!
//! # Invariants
//! - Every mutating call is a full read-modify-write of the affected value.
//! - Malformed persisted JSON is logged and treated as absent, so callers
//!   fall back to their seed defaults instead of crashing.
//! - Two managers sharing one store can clobber each other's writes; this
//!   is the accepted multi-tab limitation, not handled.

use crate::model::user::{User, UserId};
use crate::repo::kv_repo::{KvStore, StoreError, StoreResult};
use crate::session::password::{hash_password, verify_password, PasswordHashError};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registry of all known accounts, stored as one JSON array.
pub const USERS_REGISTRY_KEY: &str = "users_registry";
/// Pointer to the user whose session should be restored on startup.
pub const CURRENT_SESSION_KEY: &str = "current_session";

/// Prefix isolating one user's entity collections from another's.
const USER_DATA_NAMESPACE: &str = "checkplus";

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Demo account seeded for first-run exploration.
pub const DEMO_NAME: &str = "Usuário Demo";
pub const DEMO_EMAIL: &str = "demo@checkplus.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Authentication failure taxonomy surfaced to form callers.
#[derive(Debug)]
pub enum AuthError {
    /// The email is already present in the registry.
    DuplicateEmail(String),
    /// The password is shorter than [`MIN_PASSWORD_CHARS`].
    WeakPassword { min_chars: usize },
    /// No registry entry matches the email and password.
    InvalidCredentials,
    PasswordHash(PasswordHashError),
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail(email) => {
                write!(f, "email `{email}` is already registered")
            }
            Self::WeakPassword { min_chars } => {
                write!(f, "password must have at least {min_chars} characters")
            }
            Self::InvalidCredentials => write!(f, "email or password is incorrect"),
            Self::PasswordHash(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PasswordHash(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(value: PasswordHashError) -> Self {
        Self::PasswordHash(value)
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Explicit session context over a key-value store.
///
/// Owns the current-user identity for its lifetime; there is no ambient
/// global session, so several managers (and therefore sessions) can coexist
/// in one process, each over its own store.
pub struct SessionManager<S: KvStore> {
    store: S,
    user: Option<User>,
}

impl<S: KvStore> SessionManager<S> {
    /// Creates a manager, restoring the persisted session if one exists.
    ///
    /// A malformed `current_session` record is logged and ignored; the
    /// manager then starts without an active session.
    pub fn new(store: S) -> StoreResult<Self> {
        let user = match store.get(CURRENT_SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(
                        "event=session_restore module=session status=ok user_id={}",
                        user.id
                    );
                    Some(user)
                }
                Err(err) => {
                    warn!("event=session_restore module=session status=error error_code=malformed_session error={err}");
                    None
                }
            },
            None => None,
        };
        Ok(Self { store, user })
    }

    /// Returns the currently authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Registers a new account and activates its session.
    ///
    /// # Errors
    /// - `DuplicateEmail` when the email exists, regardless of other fields.
    /// - `WeakPassword` when the password is shorter than the minimum.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let mut users = self.load_registry()?;
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::DuplicateEmail(email.to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::WeakPassword {
                min_chars: MIN_PASSWORD_CHARS,
            });
        }

        let user = User::new(name, email, hash_password(password)?);
        users.push(user.clone());
        self.save_registry(&users)?;
        self.set_session(user.clone())?;

        info!(
            "event=register module=session status=ok user_id={}",
            user.id
        );
        Ok(user)
    }

    /// Authenticates against the registry and activates the session.
    ///
    /// # Errors
    /// - `InvalidCredentials` when no entry matches both email and password.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let users = self.load_registry()?;
        let user = users
            .into_iter()
            .find(|user| user.email == email && verify_password(password, &user.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        self.set_session(user.clone())?;
        info!("event=login module=session status=ok user_id={}", user.id);
        Ok(user)
    }

    /// Clears the session and removes the persisted pointer. Idempotent.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.user = None;
        self.store.remove(CURRENT_SESSION_KEY)?;
        info!("event=logout module=session status=ok");
        Ok(())
    }

    /// Idempotently seeds the demo account into the registry.
    ///
    /// Does not activate a session; the demo user logs in like any other.
    pub fn ensure_demo_user(&self) -> Result<(), AuthError> {
        let mut users = self.load_registry()?;
        if users.iter().any(|user| user.email == DEMO_EMAIL) {
            return Ok(());
        }
        users.push(User::new(
            DEMO_NAME,
            DEMO_EMAIL,
            hash_password(DEMO_PASSWORD)?,
        ));
        self.save_registry(&users)?;
        info!("event=demo_seed module=session status=ok");
        Ok(())
    }

    /// Reads a JSON value stored under the active user's namespace.
    ///
    /// Returns `Ok(None)` when no session is active, when nothing is
    /// persisted yet, or when the persisted value fails to parse (the
    /// malformed value is logged and left in place).
    pub fn get_user_data<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(user) = &self.user else {
            return Ok(None);
        };
        let storage_key = user_data_key(user.id, key);
        let Some(raw) = self.store.get(&storage_key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("event=user_data_read module=session status=error error_code=malformed_value key={storage_key} error={err}");
                Ok(None)
            }
        }
    }

    /// Writes a JSON value under the active user's namespace, fully
    /// overwriting any prior value. Silent no-op without a session.
    pub fn set_user_data<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let Some(user) = &self.user else {
            return Ok(());
        };
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(&user_data_key(user.id, key), &raw)
    }

    fn load_registry(&self) -> StoreResult<Vec<User>> {
        let Some(raw) = self.store.get(USERS_REGISTRY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(err) => {
                warn!("event=registry_read module=session status=error error_code=malformed_registry error={err}");
                Ok(Vec::new())
            }
        }
    }

    fn save_registry(&self, users: &[User]) -> StoreResult<()> {
        let raw = serde_json::to_string(users).map_err(|source| StoreError::Serialize {
            key: USERS_REGISTRY_KEY.to_string(),
            source,
        })?;
        self.store.set(USERS_REGISTRY_KEY, &raw)
    }

    fn set_session(&mut self, user: User) -> StoreResult<()> {
        let raw = serde_json::to_string(&user).map_err(|source| StoreError::Serialize {
            key: CURRENT_SESSION_KEY.to_string(),
            source,
        })?;
        self.store.set(CURRENT_SESSION_KEY, &raw)?;
        self.user = Some(user);
        Ok(())
    }
}

fn user_data_key(user_id: UserId, key: &str) -> String {
    format!("{USER_DATA_NAMESPACE}_{user_id}_{key}")
}

#[cfg(test)]
mod tests {
    use super::user_data_key;
    use uuid::Uuid;

    #[test]
    fn user_data_key_is_namespaced_by_user_id() {
        let id = Uuid::nil();
        assert_eq!(
            user_data_key(id, "lists"),
            format!("checkplus_{id}_lists")
        );
    }
}
