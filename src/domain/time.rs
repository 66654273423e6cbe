// src/domain/time.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::FridgeError;

// Naive layouts the backend and the add-item forms produce. Python's
// `isoformat()` omits the offset, so these are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a timestamp as sent by the API.
///
/// Accepts RFC 3339 (any offset, normalized to UTC), naive ISO date-times
/// with or without fractional seconds, and bare `YYYY-MM-DD` dates (midnight).
/// Returns `None` for anything else; callers decide how to degrade.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Like [`parse_timestamp`], but for user-supplied values where a typo
/// should be reported instead of silently ignored.
pub fn parse_timestamp_strict(raw: &str) -> Result<DateTime<Utc>, FridgeError> {
    parse_timestamp(raw).ok_or_else(|| FridgeError::InvalidTimestamp(raw.to_string()))
}
