//! Payroll engine
//!
//! This crate tracks job-category hourly rates and the hours each employee
//! has worked, and computes individual and total salaries. State lives in
//! memory for the lifetime of a [`payroll::PayrollService`]; the [`cli`]
//! module drives it from an interactive numbered menu.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
