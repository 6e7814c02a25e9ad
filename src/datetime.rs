//! Date/time utilities for ProjectHub.
//!
//! The database stores timestamps as UTC text in SQLite's
//! `YYYY-MM-DD HH:MM:SS` format.

use chrono::{DateTime, NaiveDateTime, Utc};

/// SQLite datetime format used for every stored timestamp.
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a database datetime string (YYYY-MM-DD HH:MM:SS) to RFC3339 format.
///
/// The database stores times in UTC, so this appends 'Z'.
///
/// # Returns
///
/// RFC3339 formatted string (e.g., "2024-01-15T10:30:00Z")
pub fn to_rfc3339(datetime_str: &str) -> String {
    format!("{}Z", datetime_str.replace(' ', "T"))
}

/// Format a UTC datetime for storage.
pub fn to_db_string(dt: &DateTime<Utc>) -> String {
    dt.format(DB_FORMAT).to_string()
}

/// Parse a stored datetime string back into UTC.
///
/// Accepts the SQLite format as well as RFC3339. Returns `None` if neither matches.
pub fn parse_db_string(datetime_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(datetime_str, DB_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(datetime_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
