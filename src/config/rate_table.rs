//! Job rate lookup table.
//!
//! This module provides the [`JobRateTable`], a keyed mapping from job name
//! to the wage and benefit rates for that job. It is built once when the
//! reference data is loaded and is read-only afterwards.
//!
//! Rates are configured as decimals and stored as the nearest `f64`, which
//! is what every hour and pay figure is computed in.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::Job;

/// The wage and benefit rates for a single job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobRate {
    /// Base hourly wage rate.
    pub wage_rate: f64,
    /// Flat hourly benefit rate.
    pub benefit_rate: f64,
}

impl JobRate {
    fn is_usable(&self) -> bool {
        self.wage_rate > 0.0 && self.benefit_rate > 0.0
    }
}

/// Lookup of job name to [`JobRate`].
///
/// # Example
///
/// ```
/// use timecard_engine::config::JobRateTable;
/// use timecard_engine::models::Job;
/// use rust_decimal::Decimal;
///
/// let table = JobRateTable::from_jobs(vec![
///     Job::new("Shop - Laborer", Decimal::new(1625, 2), Decimal::new(125, 2)),
/// ]).unwrap();
///
/// let rate = table.rate_for("Shop - Laborer").unwrap();
/// assert_eq!(rate.wage_rate, 16.25);
/// assert!(table.rate_for("Unknown").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobRateTable {
    rates: HashMap<String, JobRate>,
}

impl JobRateTable {
    /// Builds a table from a list of jobs.
    ///
    /// # Returns
    ///
    /// Returns `InvalidJob` if two jobs share the same name or a rate has no
    /// `f64` equivalent.
    pub fn from_jobs<I>(jobs: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Job>,
    {
        let mut rates = HashMap::new();

        for job in jobs {
            if job.wage_rate <= Decimal::ZERO || job.benefit_rate <= Decimal::ZERO {
                warn!(
                    job = %job.name,
                    wage_rate = %job.wage_rate,
                    benefit_rate = %job.benefit_rate,
                    "Job has a non-positive rate and will fail lookups"
                );
            }

            let rate = JobRate {
                wage_rate: rate_as_f64(&job.name, job.wage_rate)?,
                benefit_rate: rate_as_f64(&job.name, job.benefit_rate)?,
            };

            if rates.insert(job.name.clone(), rate).is_some() {
                return Err(EngineError::InvalidJob {
                    job: job.name,
                    message: "duplicate job name".to_string(),
                });
            }
        }

        Ok(Self { rates })
    }

    /// Looks up the rates for a job.
    ///
    /// A job whose wage or benefit rate is zero or negative is treated the
    /// same as a missing job, since a legitimate rate is always positive.
    ///
    /// # Returns
    ///
    /// Returns the rates if found, or `JobNotFound`.
    pub fn rate_for(&self, job: &str) -> EngineResult<JobRate> {
        self.rates
            .get(job)
            .filter(|rate| rate.is_usable())
            .copied()
            .ok_or_else(|| EngineError::JobNotFound {
                job: job.to_string(),
            })
    }

    /// Returns the number of jobs in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no jobs.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Converts a configured rate through its decimal text, so the result is
/// the correctly rounded double a JSON reader would produce for it.
fn rate_as_f64(job: &str, rate: Decimal) -> EngineResult<f64> {
    rate.to_string()
        .parse::<f64>()
        .map_err(|e| EngineError::InvalidJob {
            job: job.to_string(),
            message: format!("rate {} is not a number: {}", rate, e),
        })
}
