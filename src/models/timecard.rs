//! Timecard models for the Timecard Engine.
//!
//! This module contains the per-timepunch [`PayTimeSplit`] and
//! [`TimepunchPay`] lines along with the formatted [`EmployeeTimecard`]
//! produced once per employee.

use serde::{Deserialize, Serialize};

/// How one timepunch's hours are split across the pay tiers.
///
/// The shares sum to the timepunch's elapsed hours and are non-negative up
/// to floating-point error: once the regular cap is full, the regular share
/// of a later timepunch is the difference of two nearly equal doubles.
///
/// # Example
///
/// ```
/// use timecard_engine::models::PayTimeSplit;
///
/// let split = PayTimeSplit {
///     regular_hours: 4.0,
///     overtime_hours: 4.0,
///     doubletime_hours: 0.0,
/// };
/// assert_eq!(split.total_hours(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayTimeSplit {
    /// Hours paid at the base rate.
    pub regular_hours: f64,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: f64,
    /// Hours paid at the doubletime multiplier.
    pub doubletime_hours: f64,
}

impl PayTimeSplit {
    /// Returns the sum of all three tiers.
    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours + self.doubletime_hours
    }
}

/// The unrounded pay for a single timepunch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimepunchPay {
    /// The job the timepunch was worked under.
    pub job: String,
    /// Elapsed hours of the timepunch.
    pub hours: f64,
    /// The tier split of those hours.
    pub split: PayTimeSplit,
    /// Wage earned for the timepunch.
    pub wage: f64,
    /// Benefit earned for the timepunch.
    pub benefit: f64,
}

/// An employee's weekly timecard.
///
/// Every figure is a decimal string with exactly four digits after the
/// decimal point.
///
/// # Example
///
/// ```
/// use timecard_engine::models::EmployeeTimecard;
///
/// let timecard = EmployeeTimecard {
///     employee: "Mike".to_string(),
///     regular: "39.2856".to_string(),
///     overtime: "0.0000".to_string(),
///     doubletime: "0.0000".to_string(),
///     wage_total: "943.5819".to_string(),
///     benefit_total: "33.8080".to_string(),
/// };
/// let json = serde_json::to_value(&timecard).unwrap();
/// assert_eq!(json["wageTotal"], "943.5819");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTimecard {
    /// The employee's name.
    pub employee: String,
    /// Total regular hours.
    pub regular: String,
    /// Total overtime hours.
    pub overtime: String,
    /// Total doubletime hours.
    pub doubletime: String,
    /// Total wages across all timepunches.
    pub wage_total: String,
    /// Total benefits across all timepunches.
    pub benefit_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timecard() -> EmployeeTimecard {
        EmployeeTimecard {
            employee: "Steve".to_string(),
            regular: "40.0000".to_string(),
            overtime: "8.0000".to_string(),
            doubletime: "1.1658".to_string(),
            wage_total: "1325.3896".to_string(),
            benefit_total: "40.4573".to_string(),
        }
    }

    #[test]
    fn test_timecard_serializes_camel_case_totals() {
        let json = serde_json::to_value(sample_timecard()).unwrap();

        assert_eq!(json["employee"], "Steve");
        assert_eq!(json["doubletime"], "1.1658");
        assert_eq!(json["wageTotal"], "1325.3896");
        assert_eq!(json["benefitTotal"], "40.4573");
        assert!(json.get("wage_total").is_none());
    }

    #[test]
    fn test_timecard_round_trip() {
        let timecard = sample_timecard();
        let json = serde_json::to_string(&timecard).unwrap();
        let deserialized: EmployeeTimecard = serde_json::from_str(&json).unwrap();
        assert_eq!(timecard, deserialized);
    }

    #[test]
    fn test_default_split_is_zero() {
        let split = PayTimeSplit::default();
        assert_eq!(split.total_hours(), 0.0);
    }
}
