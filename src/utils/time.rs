//! Time utilities: ISO-8601 parsing at the boundary and minute formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Parse a naive ISO-8601 timestamp ("2024-01-01T08:00:00[.fff]").
/// Fails fast with MalformedTimestamp instead of letting a bad value
/// propagate into the layout math.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| AppError::MalformedTimestamp(s.to_string()))
}

/// Human-readable minutes, e.g. "02h 25m". Fractional input is rounded
/// to the nearest minute.
pub fn mins2readable(mins: f64) -> String {
    let m = mins.round().abs() as i64;
    format!("{:02}h {:02}m", m / 60, m % 60)
}

/// Hours with two decimals, e.g. "45.60 hrs".
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2} hrs", hours)
}
