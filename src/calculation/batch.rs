//! Batch timecard calculation.
//!
//! Every employee is calculated independently, in input order. By default
//! the first failing employee aborts the batch; [`BatchMode::Isolated`]
//! attempts every employee and reports each result on its own.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::JobRateTable;
use crate::error::EngineResult;
use crate::models::{Employee, EmployeeTimecard};

use super::timecard::calculate_employee_timecard;

/// How a batch reacts to an employee whose timecard cannot be calculated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchMode {
    /// Stop at the first failing employee.
    #[default]
    FailFast,
    /// Calculate every employee and report failures individually.
    Isolated,
}

/// Calculates timecards for all employees, stopping at the first error.
///
/// # Returns
///
/// Timecards in the same order as `employees`, or the first error.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_employee_timecards;
/// use timecard_engine::config::JobRateTable;
/// use timecard_engine::models::{Employee, Job, Timepunch};
/// use rust_decimal::Decimal;
///
/// let rates = JobRateTable::from_jobs(vec![
///     Job::new("Shop - Laborer", Decimal::new(1625, 2), Decimal::new(125, 2)),
/// ]).unwrap();
/// let employees = vec![
///     Employee::new("Alex", vec![
///         Timepunch::new("Shop - Laborer", "2022-02-14 08:00:00", "2022-02-14 16:00:00"),
///     ]),
///     Employee::new("Mike", vec![
///         Timepunch::new("Shop - Laborer", "2022-02-14 08:00:00", "2022-02-14 12:00:00"),
///     ]),
/// ];
///
/// let timecards = calculate_employee_timecards(&employees, &rates).unwrap();
/// assert_eq!(timecards[0].employee, "Alex");
/// assert_eq!(timecards[1].regular, "4.0000");
/// ```
pub fn calculate_employee_timecards(
    employees: &[Employee],
    rates: &JobRateTable,
) -> EngineResult<Vec<EmployeeTimecard>> {
    debug!(employees = employees.len(), "Calculating timecard batch");

    employees
        .iter()
        .map(|employee| calculate_employee_timecard(employee, rates))
        .collect()
}

/// Calculates timecards for all employees, keeping each result separate.
///
/// A failing employee does not affect the others.
///
/// # Returns
///
/// One result per employee, in the same order as `employees`.
pub fn calculate_employee_timecards_isolated(
    employees: &[Employee],
    rates: &JobRateTable,
) -> Vec<EngineResult<EmployeeTimecard>> {
    debug!(employees = employees.len(), "Calculating isolated timecard batch");

    employees
        .iter()
        .map(|employee| {
            let result = calculate_employee_timecard(employee, rates);
            if let Err(err) = &result {
                warn!(employee = %employee.name, error = %err, "Timecard calculation failed");
            }
            result
        })
        .collect()
}
