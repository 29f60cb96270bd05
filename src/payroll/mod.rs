//! Payroll state and the service facade over it.
//!
//! [`PayrollService`] owns a [`JobCatalog`] and an [`EmployeeDirectory`]
//! and exposes every add and query operation the command loop needs.

mod catalog;
mod directory;
mod service;

pub use catalog::JobCatalog;
pub use directory::EmployeeDirectory;
pub use service::{DEFAULT_CURRENCY, PayrollService};
