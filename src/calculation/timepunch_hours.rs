//! Timepunch hour calculation.
//!
//! This module converts a timepunch's start and end timestamps into elapsed
//! hours. No rounding happens here; full precision is carried into tier
//! allocation and wage calculation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};
use crate::models::Timepunch;

/// Milliseconds in one hour.
pub const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;

/// Naive date-time layouts, tried in order after RFC 3339.
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Date-only layout, read as midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timepunch timestamp.
///
/// Accepts, in order:
/// - RFC 3339 timestamps with an offset, converted to UTC
/// - `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`, each with optional
///   fractional seconds
/// - `YYYY-MM-DD HH:MM` and `YYYY-MM-DDTHH:MM`
/// - `YYYY-MM-DD`, taken as midnight
///
/// # Arguments
///
/// * `field` - The timepunch field being parsed, used in the error
/// * `value` - The raw timestamp
///
/// # Returns
///
/// The parsed timestamp, or `InvalidTimestamp` if no layout matches.
pub fn parse_timestamp(field: &str, value: &str) -> EngineResult<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| EngineError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Calculates the hours worked for a timepunch.
///
/// The result is `|end - start|` in milliseconds divided by 3,600,000, so a
/// timepunch recorded with its timestamps reversed yields the same hours.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_timepunch_hours;
/// use timecard_engine::models::Timepunch;
///
/// let punch = Timepunch::new("anything", "2022-02-19 07:03:41", "2022-02-19 10:00:45");
/// let hours = calculate_timepunch_hours(&punch).unwrap();
/// assert!((hours - 2.9511).abs() < 1e-4);
/// ```
pub fn calculate_timepunch_hours(timepunch: &Timepunch) -> EngineResult<f64> {
    let start = parse_timestamp("start", &timepunch.start)?;
    let end = parse_timestamp("end", &timepunch.end)?;

    let elapsed_ms = (end - start).num_milliseconds().abs();

    Ok(elapsed_ms as f64 / MILLISECONDS_PER_HOUR)
}
