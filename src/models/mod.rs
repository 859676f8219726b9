//! Core data models for the Timecard Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod job;
mod timecard;
mod timepunch;

pub use employee::Employee;
pub use job::Job;
pub use timecard::{EmployeeTimecard, PayTimeSplit, TimepunchPay};
pub use timepunch::Timepunch;
