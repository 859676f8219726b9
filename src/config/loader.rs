//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the job table
//! from YAML or from a JSON dataset, and [`load_dataset`] for reading the
//! employees to be paid.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Job;

use super::rate_table::JobRateTable;
use super::types::{Dataset, JobsConfig};

/// Loads and provides access to the job reference data.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── jobs.yaml   # Job names with wage and benefit rates
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let rate = loader.rates().rate_for("Hospital - Painter").unwrap();
/// println!("Wage rate: ${}", rate.wage_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rates: JobRateTable,
}

impl ConfigLoader {
    /// Loads the job table from `jobs.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - `jobs.yaml` is missing (`ConfigNotFound`)
    /// - `jobs.yaml` is not valid YAML for a job list (`ConfigParseError`)
    /// - two jobs share a name (`InvalidJob`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let jobs_path = path.as_ref().join("jobs.yaml");
        let jobs_config = Self::load_yaml::<JobsConfig>(&jobs_path)?;

        Self::from_jobs(jobs_config.jobs)
    }

    /// Loads the job table from the `jobMeta` section of a JSON dataset.
    pub fn from_dataset<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dataset = load_dataset(path)?;
        Self::from_jobs(dataset.jobs)
    }

    /// Builds a loader from an in-memory job list.
    pub fn from_jobs<I>(jobs: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Job>,
    {
        Ok(Self {
            rates: JobRateTable::from_jobs(jobs)?,
        })
    }

    /// Returns the job rate table.
    pub fn rates(&self) -> &JobRateTable {
        &self.rates
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

/// Loads a JSON dataset holding `jobMeta` and `employeeData`.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::load_dataset;
///
/// let dataset = load_dataset("./data/timecards.json")?;
/// println!("{} employees", dataset.employees.len());
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
pub fn load_dataset<P: AsRef<Path>>(path: P) -> EngineResult<Dataset> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
