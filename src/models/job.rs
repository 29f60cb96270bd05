//! Job category and job definition types.
//!
//! A [`JobDefinition`] prices one [`JobCategory`] at an hourly rate. The
//! catalog of definitions is what logged hours are joined against when
//! computing salaries.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The highest hourly rate a job definition may carry.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// The fixed set of job categories work can be logged against.
///
/// Each category has a stable numeric code (0 through 3) used by the
/// interactive menu.
///
/// # Example
///
/// ```
/// use payroll_engine::models::JobCategory;
///
/// let category = JobCategory::from_code(2).unwrap();
/// assert_eq!(category, JobCategory::Accounting);
/// assert_eq!(category.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    /// Engineering work (code 0).
    Engineering,
    /// Cleaning work (code 1).
    Cleaning,
    /// Accounting work (code 2).
    Accounting,
    /// Management work (code 3).
    Management,
}

impl JobCategory {
    /// All categories in code order.
    pub const ALL: [JobCategory; 4] = [
        JobCategory::Engineering,
        JobCategory::Cleaning,
        JobCategory::Accounting,
        JobCategory::Management,
    ];

    /// Returns the numeric menu code for this category.
    pub fn code(self) -> u8 {
        match self {
            JobCategory::Engineering => 0,
            JobCategory::Cleaning => 1,
            JobCategory::Accounting => 2,
            JobCategory::Management => 3,
        }
    }

    /// Converts a numeric menu code into a category.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJobCategory` for any code outside `0..=3`.
    pub fn from_code(code: i64) -> PayrollResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(PayrollError::InvalidJobCategory { code })
    }

    /// Returns the human-readable name of the category.
    pub fn name(self) -> &'static str {
        match self {
            JobCategory::Engineering => "Engineering",
            JobCategory::Cleaning => "Cleaning",
            JobCategory::Accounting => "Accounting",
            JobCategory::Management => "Management",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A job category priced at an hourly rate.
///
/// The rate is validated on construction, so every `JobDefinition` in
/// existence satisfies `0 < hourly_rate <= 10000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobDefinition {
    category: JobCategory,
    hourly_rate: Decimal,
}

impl JobDefinition {
    /// Creates a job definition, validating the hourly rate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` when `hourly_rate <= 0` or `hourly_rate > 10000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{JobCategory, JobDefinition};
    /// use rust_decimal::Decimal;
    ///
    /// let job = JobDefinition::new(JobCategory::Cleaning, Decimal::new(2550, 2)).unwrap();
    /// assert_eq!(job.hourly_rate(), Decimal::new(2550, 2));
    ///
    /// assert!(JobDefinition::new(JobCategory::Cleaning, Decimal::ZERO).is_err());
    /// ```
    pub fn new(category: JobCategory, hourly_rate: Decimal) -> PayrollResult<Self> {
        if hourly_rate <= Decimal::ZERO || hourly_rate > MAX_HOURLY_RATE {
            return Err(PayrollError::InvalidRate { rate: hourly_rate });
        }

        Ok(Self {
            category,
            hourly_rate,
        })
    }

    /// Returns the category this definition prices.
    pub fn category(&self) -> JobCategory {
        self.category
    }

    /// Returns the hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }
}
