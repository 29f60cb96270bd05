//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation and lookup failure the engine can report.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Validation failures are returned as values so callers can report them
/// and carry on; none of them leave the payroll state partially modified.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidHours { hours: 250 };
/// assert_eq!(error.to_string(), "Invalid hours 250: must be between 1 and 200");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayrollError {
    /// An hourly rate was outside the accepted range.
    #[error("Invalid hourly rate {rate}: must be greater than 0 and at most 10000")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// A number of worked hours was outside the accepted range.
    #[error("Invalid hours {hours}: must be between 1 and 200")]
    InvalidHours {
        /// The rejected number of hours.
        hours: i64,
    },

    /// No employee with the given name is registered.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A numeric job category code did not name a known category.
    #[error("Invalid job category code {code}: must be between 0 and 3")]
    InvalidJobCategory {
        /// The rejected code.
        code: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but described an invalid payroll.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what was wrong.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
