//! Wage and benefit calculation for a single timepunch.
//!
//! ## Rate Structure
//!
//! - Regular hours: 100% of the job's wage rate
//! - Overtime hours: 150% of the job's wage rate
//! - Doubletime hours: 200% of the job's wage rate
//!
//! Benefits are paid at the job's flat benefit rate for every hour worked,
//! regardless of tier.

use crate::config::JobRateTable;
use crate::error::EngineResult;
use crate::models::{PayTimeSplit, Timepunch, TimepunchPay};

/// Wage multiplier for overtime hours.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Wage multiplier for doubletime hours.
pub const DOUBLETIME_MULTIPLIER: f64 = 2.0;

/// Calculates the wage for a tier split at the given base rate.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_wage;
/// use timecard_engine::models::PayTimeSplit;
///
/// let split = PayTimeSplit {
///     regular_hours: 4.0,
///     overtime_hours: 2.0,
///     doubletime_hours: 1.0,
/// };
/// // 4 × 20 + 2 × 30 + 1 × 40
/// assert_eq!(calculate_wage(&split, 20.0), 180.0);
/// ```
pub fn calculate_wage(split: &PayTimeSplit, wage_rate: f64) -> f64 {
    split.regular_hours * wage_rate
        + split.overtime_hours * wage_rate * OVERTIME_MULTIPLIER
        + split.doubletime_hours * wage_rate * DOUBLETIME_MULTIPLIER
}

/// Calculates the benefit for a tier split. The benefit rate is not
/// multiplied by tier.
///
/// Each tier is priced separately and then summed, which is not always the
/// same double as pricing the total hours once.
pub fn calculate_benefit(split: &PayTimeSplit, benefit_rate: f64) -> f64 {
    split.regular_hours * benefit_rate
        + split.overtime_hours * benefit_rate
        + split.doubletime_hours * benefit_rate
}

/// Prices one timepunch using its job's rates.
///
/// # Arguments
///
/// * `timepunch` - The timepunch being paid
/// * `hours` - Its elapsed hours
/// * `split` - The tier split produced by allocation
/// * `rates` - The job rate table
///
/// # Returns
///
/// The unrounded [`TimepunchPay`], or `JobNotFound` if the timepunch's job
/// has no usable rate.
pub fn calculate_timepunch_pay(
    timepunch: &Timepunch,
    hours: f64,
    split: PayTimeSplit,
    rates: &JobRateTable,
) -> EngineResult<TimepunchPay> {
    let rate = rates.rate_for(&timepunch.job)?;

    Ok(TimepunchPay {
        job: timepunch.job.clone(),
        hours,
        split,
        wage: calculate_wage(&split, rate.wage_rate),
        benefit: calculate_benefit(&split, rate.benefit_rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::Job;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn split(regular: f64, overtime: f64, doubletime: f64) -> PayTimeSplit {
        PayTimeSplit {
            regular_hours: regular,
            overtime_hours: overtime,
            doubletime_hours: doubletime,
        }
    }

    fn rates() -> JobRateTable {
        JobRateTable::from_jobs(vec![
            Job::new("Hospital - Painter", dec("31.25"), dec("1.00")),
            Job::new("Shop - Laborer", dec("16.25"), dec("1.25")),
        ])
        .unwrap()
    }

    #[test]
    fn test_regular_only_wage() {
        assert_eq!(calculate_wage(&split(8.0, 0.0, 0.0), 31.25), 250.0);
    }

    #[test]
    fn test_overtime_paid_at_time_and_a_half() {
        assert_eq!(calculate_wage(&split(0.0, 2.0, 0.0), 16.25), 48.75);
    }

    #[test]
    fn test_doubletime_paid_at_double() {
        assert_eq!(calculate_wage(&split(0.0, 0.0, 3.0), 20.0), 120.0);
    }

    #[test]
    fn test_mixed_tiers_wage() {
        // 40 × 31.25 + 8 × 46.875 + 6 × 62.5
        assert_eq!(calculate_wage(&split(40.0, 8.0, 6.0), 31.25), 2000.0);
    }

    #[test]
    fn test_benefit_is_not_tier_multiplied() {
        assert_eq!(calculate_benefit(&split(4.0, 4.0, 2.0), 1.25), 12.5);
    }

    #[test]
    fn test_benefit_prices_each_tier() {
        // (0.1 + 0.2) × 1.25 would be 0.37500000000000006
        assert_eq!(calculate_benefit(&split(0.1, 0.2, 0.0), 1.25), 0.375);
    }

    #[test]
    fn test_timepunch_pay_uses_job_rates() {
        let punch = Timepunch::new("Shop - Laborer", "2022-02-18 08:00:00", "2022-02-18 18:00:00");

        let pay = calculate_timepunch_pay(&punch, 10.0, split(6.0, 4.0, 0.0), &rates()).unwrap();

        assert_eq!(pay.job, "Shop - Laborer");
        assert_eq!(pay.hours, 10.0);
        // 6 × 16.25 + 4 × 24.375
        assert_eq!(pay.wage, 195.0);
        assert_eq!(pay.benefit, 12.5);
    }

    #[test]
    fn test_timepunch_pay_unknown_job() {
        let punch = Timepunch::new("Hospital - Laborer", "2022-02-18 08:00:00", "2022-02-18 16:00:00");

        match calculate_timepunch_pay(&punch, 8.0, split(8.0, 0.0, 0.0), &rates()).unwrap_err() {
            EngineError::JobNotFound { job } => assert_eq!(job, "Hospital - Laborer"),
            other => panic!("Expected JobNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_hours_earn_nothing() {
        let punch = Timepunch::new("Hospital - Painter", "2022-02-18 08:00:00", "2022-02-18 08:00:00");

        let pay = calculate_timepunch_pay(&punch, 0.0, PayTimeSplit::default(), &rates()).unwrap();

        assert_eq!(pay.wage, 0.0);
        assert_eq!(pay.benefit, 0.0);
    }
}
