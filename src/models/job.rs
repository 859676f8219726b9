//! Job reference data.
//!
//! A job carries the wage and benefit rates applied to every timepunch
//! recorded against it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A job with its hourly wage rate and hourly benefit rate.
///
/// The job name is the primary key used by timepunches. On the wire the
/// fields use the dataset names `job`, `rate` and `benefitsRate`; the
/// snake_case names are accepted as aliases so YAML tables read naturally.
///
/// # Example
///
/// ```
/// use timecard_engine::models::Job;
/// use rust_decimal::Decimal;
///
/// let json = r#"{"job": "Hospital - Painter", "rate": 31.25, "benefitsRate": 1.0}"#;
/// let job: Job = serde_json::from_str(json).unwrap();
/// assert_eq!(job.name, "Hospital - Painter");
/// assert_eq!(job.wage_rate, Decimal::new(3125, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// The unique job name.
    #[serde(rename = "job", alias = "name")]
    pub name: String,
    /// Base hourly wage rate.
    #[serde(rename = "rate", alias = "wage_rate")]
    pub wage_rate: Decimal,
    /// Flat hourly benefit rate, not multiplied by the hour tier.
    #[serde(rename = "benefitsRate", alias = "benefit_rate")]
    pub benefit_rate: Decimal,
}

impl Job {
    /// Creates a new job definition.
    pub fn new(name: impl Into<String>, wage_rate: Decimal, benefit_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            wage_rate,
            benefit_rate,
        }
    }
}
