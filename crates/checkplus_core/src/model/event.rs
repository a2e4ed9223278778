//! Calendar event model and seed defaults.
//!
//! # Responsibility
//! - Define the event record and the date-keyed bucket mapping.
//! - Validate the `HH:MM`-or-empty time field.
//!
//! # Invariants
//! - Date keys are `YYYY-MM-DD` strings (see [`crate::clock::date_key`]).
//! - Events within a date bucket stay in insertion order.
//! - Deleting the last event of a day leaves an empty bucket in place.

use crate::clock::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for calendar event fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyTitle,
    BadTime { value: String },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title cannot be empty"),
            Self::BadTime { value } => {
                write!(f, "event time `{value}` is not `HH:MM` or empty")
            }
        }
    }
}

impl Error for EventValidationError {}

/// One calendar entry inside a date bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    /// `HH:MM` in 24-hour form, or empty for all-day entries.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Creates a validated event with a fresh epoch-millisecond id.
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        location: Option<String>,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id: now_epoch_ms(),
            title: title.into(),
            time: time.into(),
            location,
        };
        event.validate()?;
        Ok(event)
    }

    /// Checks title and time format without mutating.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if !self.time.is_empty() && !is_valid_time(&self.time) {
            return Err(EventValidationError::BadTime {
                value: self.time.clone(),
            });
        }
        Ok(())
    }
}

/// Per-user event storage: date key to ordered event sequence.
///
/// A `BTreeMap` keeps buckets sorted chronologically, which the `YYYY-MM-DD`
/// key format makes equivalent to lexicographic order.
pub type EventsByDate = BTreeMap<String, Vec<CalendarEvent>>;

/// Seed defaults returned before the user has persisted any events.
pub fn seed_events() -> EventsByDate {
    fn event(id: i64, title: &str, time: &str, location: &str) -> CalendarEvent {
        CalendarEvent {
            id,
            title: title.to_string(),
            time: time.to_string(),
            location: Some(location.to_string()),
        }
    }

    let mut events = EventsByDate::new();
    events.insert(
        "2025-08-27".to_string(),
        vec![
            event(1, "Reunião de trabalho", "14:00", "Escritório"),
            event(2, "Consulta médica", "16:30", "Clínica"),
        ],
    );
    events.insert(
        "2025-08-28".to_string(),
        vec![event(3, "Aniversário da Maria", "19:00", "Casa")],
    );
    events
}

fn is_valid_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours < 24 && minutes < 60
}

#[cfg(test)]
mod tests {
    use super::is_valid_time;

    #[test]
    fn time_format_accepts_valid_and_rejects_invalid() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("9:30"));
        assert!(!is_valid_time("ab:cd"));
    }
}
