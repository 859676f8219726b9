//! HTTP request handlers for the Timecard Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    BatchMode, calculate_employee_timecards, calculate_employee_timecards_isolated,
};
use crate::config::JobRateTable;
use crate::error::EngineResult;
use crate::models::Employee;

use super::request::TimecardRequest;
use super::response::{ApiError, ApiErrorResponse, EmployeeFailure, TimecardResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timecards", post(timecards_handler))
        .with_state(state)
}

/// Handler for POST /timecards endpoint.
///
/// Accepts a batch of employees and returns their weekly timecards.
async fn timecards_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimecardRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timecard request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let batch_mode = request.batch_mode;
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match perform_calculation(&employees, batch_mode, state.config().rates(), correlation_id) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                timecards = response.timecards.len(),
                failures = response.failures.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Timecard calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timecard calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the batch in the requested mode and assembles the response body.
fn perform_calculation(
    employees: &[Employee],
    batch_mode: BatchMode,
    rates: &JobRateTable,
    calculation_id: Uuid,
) -> EngineResult<TimecardResponse> {
    let (timecards, failures) = match batch_mode {
        BatchMode::FailFast => (calculate_employee_timecards(employees, rates)?, Vec::new()),
        BatchMode::Isolated => {
            let mut timecards = Vec::new();
            let mut failures = Vec::new();
            let results = calculate_employee_timecards_isolated(employees, rates);

            for (employee, result) in employees.iter().zip(results) {
                match result {
                    Ok(timecard) => timecards.push(timecard),
                    Err(err) => failures.push(EmployeeFailure {
                        employee: employee.name.clone(),
                        error: ApiErrorResponse::from(err).error,
                    }),
                }
            }

            (timecards, failures)
        }
    };

    Ok(TimecardResponse {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        timecards,
        failures,
    })
}
