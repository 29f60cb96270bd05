//! Calculation logic for the payroll engine.
//!
//! This module contains the salary calculation that prices an employee's
//! logged hours against the job catalog.

mod salary;

pub use salary::{
    DUPLICATE_DEFINITION_WARNING, UNPRICED_ENTRY_WARNING, compute_salary,
    compute_salary_breakdown,
};
