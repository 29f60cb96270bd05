//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::JobCategory;
use crate::payroll::DEFAULT_CURRENCY;

/// A job definition to create at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobSeed {
    /// The category being priced.
    pub category: JobCategory,
    /// The hourly rate; validated when the payroll is seeded.
    pub hourly_rate: Decimal,
}

/// Startup configuration for a payroll.
///
/// Every field is optional in the file:
///
/// ```yaml
/// currency: RUB
/// jobs:
///   - category: engineering
///     hourly_rate: "120.50"
///   - category: cleaning
///     hourly_rate: 25
/// employees:
///   - Alice
///   - Bob
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// Label printed after monetary amounts.
    pub currency: String,
    /// Job definitions to create, in order.
    pub jobs: Vec<JobSeed>,
    /// Employees to register, in order.
    pub employees: Vec<String>,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            jobs: Vec::new(),
            employees: Vec::new(),
        }
    }
}
