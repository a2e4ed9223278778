//! Core domain logic for Check+.
//! This crate is the single source of truth for session and persistence
//! invariants; screens are thin consumers of the contracts exported here.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::checklist::{Checklist, ChecklistItem, Checklists, ListId};
pub use model::event::{CalendarEvent, EventValidationError, EventsByDate};
pub use model::postit::{PostIt, PostItColor, PostItValidationError};
pub use model::user::{User, UserId};
pub use repo::kv_repo::{KvStore, SqliteKvStore, StoreError, StoreResult};
pub use service::calendar_service::{CalendarError, CalendarService, EventPatch};
pub use service::checklist_service::ChecklistService;
pub use service::postit_service::{PostItError, PostItPatch, PostItService};
pub use session::manager::{AuthError, SessionManager};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
