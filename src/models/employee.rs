//! Employee model.
//!
//! This module defines the Employee struct holding a worker's name and the
//! ordered timepunches recorded for the week.

use serde::{Deserialize, Serialize};

use super::Timepunch;

/// An employee and their timepunches for one week.
///
/// Timepunch order is significant: tier allocation carries running totals
/// from one timepunch to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name.
    #[serde(rename = "employee", alias = "name")]
    pub name: String,
    /// Shifts worked, in processing order.
    #[serde(rename = "timePunch", alias = "timepunches", default)]
    pub timepunches: Vec<Timepunch>,
}

impl Employee {
    /// Creates an employee with the given timepunches.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::{Employee, Timepunch};
    ///
    /// let employee = Employee::new(
    ///     "Mike",
    ///     vec![Timepunch::new("Shop - Laborer", "2022-02-18 09:00:00", "2022-02-18 17:00:00")],
    /// );
    /// assert_eq!(employee.timepunches.len(), 1);
    /// ```
    pub fn new(name: impl Into<String>, timepunches: Vec<Timepunch>) -> Self {
        Self {
            name: name.into(),
            timepunches,
        }
    }
}
