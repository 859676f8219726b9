//! Weekly hour tier allocation.
//!
//! Hours are allocated to tiers one timepunch at a time, in the order the
//! timepunches were recorded:
//!
//! - **Regular:** the first 40 hours of the week
//! - **Overtime:** the next 8 hours
//! - **Doubletime:** everything beyond 48 hours, uncapped
//!
//! The running totals are an immutable [`TierTotals`] value threaded through
//! [`allocate_hours`], so each step can be tested on its own and a whole week
//! is a fold over the timepunch hours.

use serde::{Deserialize, Serialize};

use crate::models::PayTimeSplit;

/// Maximum regular hours per week.
pub const MAX_REGULAR_HOURS: f64 = 40.0;

/// Maximum overtime hours per week, beyond the regular cap.
pub const MAX_OVERTIME_HOURS: f64 = 8.0;

/// Running tier totals for one employee's week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierTotals {
    /// Cumulative regular hours, never above [`MAX_REGULAR_HOURS`].
    pub regular: f64,
    /// Cumulative overtime hours, never above [`MAX_OVERTIME_HOURS`].
    pub overtime: f64,
    /// Cumulative doubletime hours.
    pub doubletime: f64,
}

impl TierTotals {
    /// Returns the hours allocated across all tiers.
    pub fn total_hours(&self) -> f64 {
        self.regular + self.overtime + self.doubletime
    }
}

/// Allocates one timepunch's hours on top of the running totals.
///
/// All hours are first counted as regular. Anything that pushes the weekly
/// regular total past 40 moves to overtime, and anything that then pushes the
/// weekly overtime total past 8 moves to doubletime. The overtime check uses
/// the running total, so a short timepunch can cross the cap when most of the
/// overtime accrued earlier in the week.
///
/// Once the regular cap is full, the regular share of a later timepunch is a
/// rounding residue of either sign, on the order of 1e-15.
///
/// Zero, negative and NaN hours leave the totals unchanged and produce an
/// empty split.
///
/// # Returns
///
/// The updated totals and the split for this timepunch.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::{allocate_hours, TierTotals};
///
/// let before = TierTotals {
///     regular: 36.0,
///     overtime: 0.0,
///     doubletime: 0.0,
/// };
/// let (after, split) = allocate_hours(before, 8.0);
///
/// assert_eq!(split.regular_hours, 4.0);
/// assert_eq!(split.overtime_hours, 4.0);
/// assert_eq!(after.regular, 40.0);
/// assert_eq!(after.overtime, 4.0);
/// ```
pub fn allocate_hours(totals: TierTotals, hours: f64) -> (TierTotals, PayTimeSplit) {
    let hours = hours.max(0.0);

    let mut split = PayTimeSplit {
        regular_hours: hours,
        ..PayTimeSplit::default()
    };
    let mut next = TierTotals {
        regular: totals.regular + hours,
        ..totals
    };

    if next.regular > MAX_REGULAR_HOURS {
        let excess = next.regular - MAX_REGULAR_HOURS;
        split.overtime_hours = excess;
        split.regular_hours -= excess;
        next.overtime += excess;
        next.regular = MAX_REGULAR_HOURS;
    }

    if next.overtime > MAX_OVERTIME_HOURS {
        let excess = next.overtime - MAX_OVERTIME_HOURS;
        split.doubletime_hours = excess;
        split.overtime_hours -= excess;
        next.doubletime += excess;
        next.overtime = MAX_OVERTIME_HOURS;
    }

    (next, split)
}

/// Allocates a week of timepunch hours, in order, starting from zero.
///
/// # Returns
///
/// The final weekly totals and one split per input entry.
pub fn allocate_timepunches(hours: &[f64]) -> (TierTotals, Vec<PayTimeSplit>) {
    hours.iter().fold(
        (TierTotals::default(), Vec::with_capacity(hours.len())),
        |(totals, mut splits), &timepunch_hours| {
            let (next, split) = allocate_hours(totals, timepunch_hours);
            splits.push(split);
            (next, splits)
        },
    )
}
