//! HTTP API module for the Timecard Engine.
//!
//! This module provides the REST endpoint for calculating weekly timecards
//! for a batch of employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, TimecardRequest, TimepunchRequest};
pub use response::{ApiError, ApiErrorResponse, EmployeeFailure, TimecardResponse};
pub use state::AppState;
