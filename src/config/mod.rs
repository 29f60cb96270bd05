//! Configuration loading for the payroll engine.
//!
//! A configuration file seeds a new payroll with a currency label, job
//! definitions and employees. All fields are optional.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//! use payroll_engine::payroll::PayrollService;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap().into_config();
//! let payroll = PayrollService::from_config(&config).unwrap();
//! println!("{} jobs defined", payroll.jobs().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{JobSeed, PayrollConfig};
