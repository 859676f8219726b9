//! Timecard Engine for weekly payroll
//!
//! This crate computes weekly timecards from raw timepunch records, splitting
//! worked hours into regular, overtime and doubletime tiers and converting
//! them into wage and benefit totals using per-job rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
