//! Timecard aggregation.
//!
//! This module walks an employee's timepunches in order, allocating hours to
//! tiers and pricing each timepunch, then sums the results into a
//! [`TimecardBreakdown`] and formats it as an [`EmployeeTimecard`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::JobRateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeTimecard, TimepunchPay};

use super::tier_allocation::{TierTotals, allocate_hours};
use super::timepunch_hours::calculate_timepunch_hours;
use super::wage_benefit::calculate_timepunch_pay;

/// Digits after the decimal point on every timecard figure.
pub const TIMECARD_DECIMAL_PLACES: u32 = 4;

/// The unrounded result behind an employee's timecard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardBreakdown {
    /// The employee's name.
    pub employee: String,
    /// Weekly tier totals.
    pub totals: TierTotals,
    /// Sum of the timepunch wages.
    pub wage_total: f64,
    /// Sum of the timepunch benefits.
    pub benefit_total: f64,
    /// Per-timepunch pay, in input order.
    pub timepunches: Vec<TimepunchPay>,
}

impl TimecardBreakdown {
    /// Formats the breakdown as a timecard with four decimal places.
    pub fn to_timecard(&self) -> EmployeeTimecard {
        EmployeeTimecard {
            employee: self.employee.clone(),
            regular: format_fixed(self.totals.regular),
            overtime: format_fixed(self.totals.overtime),
            doubletime: format_fixed(self.totals.doubletime),
            wage_total: format_fixed(self.wage_total),
            benefit_total: format_fixed(self.benefit_total),
        }
    }
}

/// Formats a value with exactly four digits after the decimal point.
///
/// Rounding is decided on the exact binary value of the double, with ties
/// going away from zero. A figure that reads as `…5` in the fifth place is
/// usually a double just below or just above it, and rounds accordingly.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::format_fixed;
///
/// assert_eq!(format_fixed(40.0), "40.0000");
/// assert_eq!(format_fixed(1.1658333333333317), "1.1658");
/// // 0.03125 is exact in binary, so it is a true tie
/// assert_eq!(format_fixed(0.03125), "0.0313");
/// // 13.54375 is stored just below the tie
/// assert_eq!(format_fixed(13.54375), "13.5437");
/// ```
pub fn format_fixed(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(
                TIMECARD_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            );
            rounded.rescale(TIMECARD_DECIMAL_PLACES);
            rounded.to_string()
        }
        // Out of Decimal range or not finite.
        None => format!("{:.*}", TIMECARD_DECIMAL_PLACES as usize, value),
    }
}

/// Calculates the unrounded timecard breakdown for one employee.
///
/// Timepunches are processed strictly in order; the first timepunch with an
/// unparsable timestamp or an unknown job stops the calculation.
///
/// # Returns
///
/// Returns the breakdown, or an error if:
/// - the employee has no timepunches (`EmptyTimepunchList`)
/// - a timestamp cannot be parsed (`InvalidTimestamp`)
/// - a job has no usable rate (`JobNotFound`)
pub fn calculate_employee_timecard_breakdown(
    employee: &Employee,
    rates: &JobRateTable,
) -> EngineResult<TimecardBreakdown> {
    if employee.timepunches.is_empty() {
        return Err(EngineError::EmptyTimepunchList {
            employee: employee.name.clone(),
        });
    }

    let (totals, timepunches) = employee.timepunches.iter().try_fold(
        (
            TierTotals::default(),
            Vec::with_capacity(employee.timepunches.len()),
        ),
        |(totals, mut lines), timepunch| -> EngineResult<_> {
            let hours = calculate_timepunch_hours(timepunch)?;
            let (next, split) = allocate_hours(totals, hours);
            lines.push(calculate_timepunch_pay(timepunch, hours, split, rates)?);
            Ok((next, lines))
        },
    )?;

    let wage_total: f64 = timepunches.iter().map(|line| line.wage).sum();
    let benefit_total: f64 = timepunches.iter().map(|line| line.benefit).sum();

    debug!(
        employee = %employee.name,
        timepunches = timepunches.len(),
        regular = %totals.regular,
        overtime = %totals.overtime,
        doubletime = %totals.doubletime,
        "Timecard calculated"
    );

    Ok(TimecardBreakdown {
        employee: employee.name.clone(),
        totals,
        wage_total,
        benefit_total,
        timepunches,
    })
}

/// Calculates an employee's formatted weekly timecard.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_employee_timecard;
/// use timecard_engine::config::JobRateTable;
/// use timecard_engine::models::{Employee, Job, Timepunch};
/// use rust_decimal::Decimal;
///
/// let rates = JobRateTable::from_jobs(vec![
///     Job::new("Shop - Laborer", Decimal::new(1625, 2), Decimal::new(125, 2)),
/// ]).unwrap();
/// let employee = Employee::new(
///     "Alex",
///     vec![Timepunch::new("Shop - Laborer", "2022-02-14 08:00:00", "2022-02-14 17:00:00")],
/// );
///
/// let timecard = calculate_employee_timecard(&employee, &rates).unwrap();
/// assert_eq!(timecard.regular, "9.0000");
/// assert_eq!(timecard.wage_total, "146.2500");
/// ```
pub fn calculate_employee_timecard(
    employee: &Employee,
    rates: &JobRateTable,
) -> EngineResult<EmployeeTimecard> {
    calculate_employee_timecard_breakdown(employee, rates).map(|breakdown| breakdown.to_timecard())
}
