//! Work entry model.
//!
//! A [`WorkEntry`] records a number of whole hours an employee worked in a
//! given job category.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};

use super::JobCategory;

/// The fewest hours a single work entry may record.
pub const MIN_WORK_HOURS: i64 = 1;

/// The most hours a single work entry may record.
pub const MAX_WORK_HOURS: i64 = 200;

/// Hours worked in one job category.
///
/// Entries are immutable once created and always satisfy
/// `1 <= hours <= 200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    category: JobCategory,
    hours: u32,
}

impl WorkEntry {
    /// Creates a work entry, validating the number of hours.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHours` when `hours <= 0` or `hours > 200`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{JobCategory, WorkEntry};
    ///
    /// let entry = WorkEntry::new(JobCategory::Engineering, 10).unwrap();
    /// assert_eq!(entry.hours(), 10);
    ///
    /// assert!(WorkEntry::new(JobCategory::Engineering, 201).is_err());
    /// ```
    pub fn new(category: JobCategory, hours: i64) -> PayrollResult<Self> {
        if !(MIN_WORK_HOURS..=MAX_WORK_HOURS).contains(&hours) {
            return Err(PayrollError::InvalidHours { hours });
        }

        let hours = u32::try_from(hours).map_err(|_| PayrollError::InvalidHours { hours })?;
        Ok(Self { category, hours })
    }

    /// Returns the category the hours were worked in.
    pub fn category(&self) -> JobCategory {
        self.category
    }

    /// Returns the number of hours worked.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the hours as a decimal, ready for multiplying by a rate.
    pub fn hours_decimal(&self) -> Decimal {
        Decimal::from(self.hours)
    }
}
