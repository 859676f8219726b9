//! Request types for the Timecard Engine API.
//!
//! This module defines the JSON request structures for the `/timecards`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::BatchMode;
use crate::models::{Employee, Timepunch};

/// Request body for the `/timecards` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimecardRequest {
    /// The employees to calculate timecards for, in output order.
    pub employees: Vec<EmployeeRequest>,
    /// How to react to an employee that fails.
    #[serde(default)]
    pub batch_mode: BatchMode,
}

/// Employee information in a timecard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    #[serde(alias = "name")]
    pub employee: String,
    /// Shifts worked during the week, in processing order.
    #[serde(alias = "timePunch", default)]
    pub timepunches: Vec<TimepunchRequest>,
}

/// Timepunch information in a timecard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimepunchRequest {
    /// The job name.
    pub job: String,
    /// The shift start timestamp.
    pub start: String,
    /// The shift end timestamp.
    pub end: String,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.employee,
            timepunches: req.timepunches.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TimepunchRequest> for Timepunch {
    fn from(req: TimepunchRequest) -> Self {
        Timepunch {
            job: req.job,
            start: req.start,
            end: req.end,
        }
    }
}
