//! Employee model and related types.
//!
//! This module defines the Employee struct and the EmployeeId handle used
//! to tell apart employees that share a name.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollResult;

use super::{JobCategory, WorkEntry, WorkLog};

/// Unique identifier assigned to an employee at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Represents an employee and the work they have logged.
///
/// Names are not unique: two employees may share a name and are still
/// distinct records with distinct ids.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{Employee, JobCategory};
///
/// let mut employee = Employee::new("Alice");
/// employee.log_work(JobCategory::Engineering, 10).unwrap();
/// assert_eq!(employee.name(), "Alice");
/// assert_eq!(employee.work_log().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    work_log: WorkLog,
}

impl Employee {
    /// Creates an employee with an empty work log.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            work_log: WorkLog::new(),
        }
    }

    /// Returns the employee's identifier.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's work log.
    pub fn work_log(&self) -> &WorkLog {
        &self.work_log
    }

    /// Logs `hours` worked in `category`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHours` when `hours` is outside `1..=200`; the log is
    /// unchanged in that case.
    pub fn log_work(&mut self, category: JobCategory, hours: i64) -> PayrollResult<WorkEntry> {
        self.work_log.log_work(category, hours)
    }
}
