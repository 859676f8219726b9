//! Calculation logic for the Timecard Engine.
//!
//! This module contains the calculation pipeline for weekly timecards:
//! timepunch hour calculation, regular/overtime/doubletime tier allocation,
//! per-timepunch wage and benefit calculation, timecard aggregation and
//! formatting, and the batch driver over many employees.

mod batch;
mod tier_allocation;
mod timecard;
mod timepunch_hours;
mod wage_benefit;

pub use batch::{BatchMode, calculate_employee_timecards, calculate_employee_timecards_isolated};
pub use tier_allocation::{
    MAX_OVERTIME_HOURS, MAX_REGULAR_HOURS, TierTotals, allocate_hours, allocate_timepunches,
};
pub use timecard::{
    TIMECARD_DECIMAL_PLACES, TimecardBreakdown, calculate_employee_timecard,
    calculate_employee_timecard_breakdown, format_fixed,
};
pub use timepunch_hours::{MILLISECONDS_PER_HOUR, calculate_timepunch_hours, parse_timestamp};
pub use wage_benefit::{
    DOUBLETIME_MULTIPLIER, OVERTIME_MULTIPLIER, calculate_benefit, calculate_timepunch_pay,
    calculate_wage,
};
