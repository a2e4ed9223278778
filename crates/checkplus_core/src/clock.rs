//! Time helpers shared by id generation and calendar bucketing.
//!
//! # Responsibility
//! - Produce epoch-millisecond ids for entity items.
//! - Format calendar-day keys and resolve the local "today".
//!
//! # Invariants
//! - Date keys are always `YYYY-MM-DD` with zero padding.
//! - `now_epoch_ms` is monotonically increasing at millisecond resolution,
//!   but two rapid successive calls may return the same value.

use time::{Date, OffsetDateTime};

/// Returns the current time as epoch milliseconds.
///
/// Entity item ids use this directly, keeping the id scheme simple:
/// monotonically increasing, not guaranteed unique across rapid inserts.
pub fn now_epoch_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Formats a calendar-day key as `YYYY-MM-DD`.
pub fn date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the local machine calendar day.
///
/// Falls back to the UTC day when the local offset cannot be determined
/// (for example in sandboxed multi-threaded test environments).
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .map(|now| now.date())
        .unwrap_or_else(|_| OffsetDateTime::now_utc().date())
}
