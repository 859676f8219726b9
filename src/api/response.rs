//! Response types for the Timecard Engine API.
//!
//! This module defines the timecard response body, the error response
//! structures, and the mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::EmployeeTimecard;

/// Response body for a successful `/timecards` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Timecards for every employee that succeeded, in input order.
    pub timecards: Vec<EmployeeTimecard>,
    /// Employees that failed; only populated in isolated mode.
    #[serde(default)]
    pub failures: Vec<EmployeeFailure>,
}

/// An employee whose timecard could not be calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFailure {
    /// The employee's name.
    pub employee: String,
    /// Why the calculation failed.
    pub error: ApiError,
}

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a job not found error response.
    pub fn job_not_found(job: &str) -> Self {
        Self::with_details(
            "JOB_NOT_FOUND",
            format!("Job not found: {}", job),
            format!("The job '{}' has no wage and benefit rates configured", job),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::JobNotFound { job } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::job_not_found(&job),
            },
            EngineError::InvalidTimestamp { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    format!("Invalid timestamp for '{}': '{}'", field, value),
                    "Timestamps must look like 2022-02-19 07:03:41 or be RFC 3339",
                ),
            },
            EngineError::EmptyTimepunchList { employee } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPTY_TIMEPUNCH_LIST",
                    format!("Employee '{}' has no timepunches", employee),
                    "Every employee must have at least one timepunch",
                ),
            },
            EngineError::InvalidJob { job, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Job configuration error",
                    format!("Invalid job '{}': {}", job, message),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
