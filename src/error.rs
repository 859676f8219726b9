//! Error types for the Timecard Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing timecards.

use thiserror::Error;

/// The main error type for the Timecard Engine.
///
/// Every error is fatal for the unit being processed: they describe malformed
/// input data, not transient conditions, so nothing is retried.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::JobNotFound {
///     job: "Hospital - Painter".to_string(),
/// };
/// assert_eq!(error.to_string(), "Job not found: Hospital - Painter");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The job referenced by a timepunch has no usable rate in the job table.
    #[error("Job not found: {job}")]
    JobNotFound {
        /// The job name that was looked up.
        job: String,
    },

    /// A timepunch timestamp could not be parsed.
    #[error("Invalid timestamp for '{field}': '{value}'")]
    InvalidTimestamp {
        /// Which timepunch field was invalid ("start" or "end").
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// An employee was submitted without any timepunches.
    #[error("Employee '{employee}' has no timepunches")]
    EmptyTimepunchList {
        /// The name of the employee.
        employee: String,
    },

    /// A job definition in the reference data was rejected.
    #[error("Invalid job '{job}': {message}")]
    InvalidJob {
        /// The job name.
        job: String,
        /// A description of what made the job invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
