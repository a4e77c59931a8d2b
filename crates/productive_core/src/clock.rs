//! Time source abstraction and timestamp parsing.
//!
//! # Responsibility
//! - Provide one clock source shared by validation instants and audit fields.
//! - Parse due-date input strings into epoch milliseconds.
//!
//! # Invariants
//! - All core timestamps are Unix epoch milliseconds (UTC).
//! - Due-date and "now" comparisons go through the same `Clock` instance.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" injected into the use-case layer.
///
/// Production code uses [`SystemClock`]; tests substitute deterministic
/// implementations to pin validation instants and `updated_at` values.
pub trait Clock {
    /// Current instant as Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Parses a due-date input string into epoch milliseconds.
///
/// Accepts RFC 3339 timestamps (`2026-09-01T12:00:00Z`, offset forms
/// included) and bare dates (`2026-09-01`, interpreted as midnight UTC).
/// Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.timestamp_millis());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}
