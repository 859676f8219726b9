//! Configuration loading for the Timecard Engine.
//!
//! This module loads the job reference data, either from a YAML job table or
//! from a JSON dataset in the `jobMeta` / `employeeData` shape, and builds the
//! [`JobRateTable`] used for every rate lookup.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded {} jobs", config.rates().len());
//! ```

mod loader;
mod rate_table;
mod types;

pub use loader::{ConfigLoader, load_dataset};
pub use rate_table::{JobRate, JobRateTable};
pub use types::{Dataset, JobsConfig};
