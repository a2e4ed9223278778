//! Calendar entity store.
//!
//! # Responsibility
//! - Bucket events by `YYYY-MM-DD` date key for the active user.
//! - Persist the whole `events` mapping on every change.
//!
//! # Invariants
//! - The seed default is returned, not persisted, until the first mutation.
//! - Removing the last event of a day leaves an empty bucket under the key.
//! - "Today" is the local machine calendar day.

use crate::clock::{date_key, local_today};
use crate::model::event::{seed_events, CalendarEvent, EventValidationError, EventsByDate};
use crate::repo::kv_repo::{KvStore, StoreError, StoreResult};
use crate::session::manager::SessionManager;
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::Date;

/// Logical storage key for the calendar event mapping.
pub const EVENTS_KEY: &str = "events";

/// Failure modes for calendar mutations.
#[derive(Debug)]
pub enum CalendarError {
    Validation(EventValidationError),
    Store(StoreError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<EventValidationError> for CalendarError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for CalendarError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Partial update applied to an existing event; `None` fields keep the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub location: Option<Option<String>>,
}

/// Whole-collection CRUD over the user's date-bucketed events.
pub struct CalendarService<'a, S: KvStore> {
    session: &'a SessionManager<S>,
}

impl<'a, S: KvStore> CalendarService<'a, S> {
    pub fn new(session: &'a SessionManager<S>) -> Self {
        Self { session }
    }

    /// Formats a calendar day as the storage date key.
    pub fn date_key(date: Date) -> String {
        date_key(date)
    }

    /// Returns the persisted mapping, or the seed defaults when none exist.
    pub fn load(&self) -> StoreResult<EventsByDate> {
        Ok(self
            .session
            .get_user_data(EVENTS_KEY)?
            .unwrap_or_else(seed_events))
    }

    /// Appends a validated event to one day's bucket and persists the
    /// whole mapping. An absent bucket is created.
    pub fn add_event(
        &self,
        day: &str,
        title: &str,
        time: &str,
        location: Option<&str>,
    ) -> Result<CalendarEvent, CalendarError> {
        let event = CalendarEvent::new(
            title.trim(),
            time,
            location.map(|location| location.to_string()),
        )?;
        let mut events = self.load()?;
        events
            .entry(day.to_string())
            .or_default()
            .push(event.clone());
        self.persist(&events)?;
        Ok(event)
    }

    /// Applies a patch to the matching event in one day's bucket and
    /// persists the whole mapping.
    ///
    /// An unknown id or day leaves the data unchanged but still persists,
    /// matching the whole-collection write discipline of the other
    /// mutations.
    pub fn update_event(
        &self,
        day: &str,
        event_id: i64,
        patch: &EventPatch,
    ) -> Result<(), CalendarError> {
        let mut events = self.load()?;
        if let Some(bucket) = events.get_mut(day) {
            for event in bucket {
                if event.id != event_id {
                    continue;
                }
                if let Some(title) = &patch.title {
                    event.title = title.clone();
                }
                if let Some(time) = &patch.time {
                    event.time = time.clone();
                }
                if let Some(location) = &patch.location {
                    event.location = location.clone();
                }
                event.validate()?;
            }
        }
        self.persist(&events)?;
        Ok(())
    }

    /// Deletes one event by id from one day's bucket and persists.
    ///
    /// The bucket stays in the mapping even when it becomes empty.
    pub fn remove_event(&self, day: &str, event_id: i64) -> StoreResult<()> {
        let mut events = self.load()?;
        if let Some(bucket) = events.get_mut(day) {
            bucket.retain(|event| event.id != event_id);
        }
        self.persist(&events)
    }

    /// Returns one day's events in insertion order, empty when absent.
    pub fn events_for(&self, day: &str) -> StoreResult<Vec<CalendarEvent>> {
        let events = self.load()?;
        Ok(events.get(day).cloned().unwrap_or_default())
    }

    /// Returns today's events using the local machine date.
    pub fn events_today(&self) -> StoreResult<Vec<CalendarEvent>> {
        self.events_for(&date_key(local_today()))
    }

    fn persist(&self, events: &EventsByDate) -> StoreResult<()> {
        self.session.set_user_data(EVENTS_KEY, events)
    }
}
