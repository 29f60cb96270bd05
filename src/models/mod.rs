//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod job;
mod salary_result;
mod work_entry;
mod work_log;

pub use employee::{Employee, EmployeeId};
pub use job::{JobCategory, JobDefinition, MAX_HOURLY_RATE};
pub use salary_result::{
    AuditStep, AuditTrace, AuditWarning, SalaryBreakdown, SalaryLine, SalaryLookup,
};
pub use work_entry::{MAX_WORK_HOURS, MIN_WORK_HOURS, WorkEntry};
pub use work_log::WorkLog;
