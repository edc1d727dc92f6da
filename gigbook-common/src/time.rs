//! Timestamp utilities
//!
//! All timestamps are stored in the database as `YYYY-MM-DD HH:MM:SS` text in
//! UTC. Show times submitted from forms may arrive in a handful of common
//! layouts (HTML `datetime-local` inputs omit seconds and use a `T`
//! separator), so parsing accepts those as well.

use chrono::{NaiveDateTime, Timelike, Utc};

use crate::error::{Error, Result};

/// Storage and display format for timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted input formats for show start times, tried in order
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Get current UTC timestamp, truncated to whole seconds
///
/// Stored timestamps carry second precision only, so comparisons against
/// "now" stay on the same footing.
pub fn now() -> NaiveDateTime {
    let ts = Utc::now().naive_utc();
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// Format a timestamp for storage or display
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a show start time from form input
///
/// Returns `Error::InvalidInput` if the value matches none of the accepted
/// formats.
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    for format in INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    Err(Error::InvalidInput(format!(
        "Unrecognized date/time: {}",
        input
    )))
}
