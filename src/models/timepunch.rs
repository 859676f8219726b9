//! Timepunch model.
//!
//! A timepunch is a single recorded shift against a job. Timestamps are kept
//! exactly as they arrived so that a malformed value is reported during
//! calculation rather than silently dropped at load time.

use serde::{Deserialize, Serialize};

/// A single recorded shift.
///
/// # Examples
///
/// ```
/// use timecard_engine::models::Timepunch;
///
/// let punch = Timepunch::new("Hospital - Painter", "2022-02-19 07:03:41", "2022-02-19 10:00:45");
/// assert_eq!(punch.job, "Hospital - Painter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timepunch {
    /// The job this shift was worked under; must match a job name.
    pub job: String,
    /// The shift start timestamp.
    pub start: String,
    /// The shift end timestamp.
    pub end: String,
}

impl Timepunch {
    /// Creates a timepunch from its job and raw start/end timestamps.
    pub fn new(job: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}
