//! Configuration types for the Timecard Engine.
//!
//! These are the file shapes deserialized by the loader.

use serde::{Deserialize, Serialize};

use crate::models::{Employee, Job};

/// The YAML job table (`jobs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct JobsConfig {
    /// Every job with its rates.
    pub jobs: Vec<Job>,
}

/// A complete input dataset: job reference data plus the employees to pay.
///
/// Field names follow the JSON export the engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Job reference data.
    #[serde(rename = "jobMeta", alias = "jobs")]
    pub jobs: Vec<Job>,
    /// Employees and their timepunches.
    #[serde(rename = "employeeData", alias = "employees")]
    pub employees: Vec<Employee>,
}
