//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads and validates payroll configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./payroll.yaml")?;
/// println!("Currency: {}", loader.config().currency);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`PayrollConfig`] (`ConfigParseError`)
    /// - The currency label or an employee name is blank (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        debug!(path = %path_str, jobs = loader.config.jobs.len(), "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text. `origin` names the source in
    /// error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> PayrollResult<Self> {
        // An empty file is a valid, empty configuration.
        let config = if content.trim().is_empty() {
            PayrollConfig::default()
        } else {
            serde_yaml::from_str::<PayrollConfig>(content).map_err(|e| {
                PayrollError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &PayrollConfig) -> PayrollResult<()> {
        if config.currency.trim().is_empty() {
            return Err(PayrollError::InvalidConfig {
                message: "currency must not be blank".to_string(),
            });
        }

        if let Some(index) = config
            .employees
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(PayrollError::InvalidConfig {
                message: format!("employees[{}]: name must not be blank", index),
            });
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobCategory;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    const SAMPLE: &str = r#"
currency: EUR
jobs:
  - category: engineering
    hourly_rate: "120.50"
  - category: cleaning
    hourly_rate: 25
employees:
  - Alice
  - Bob
"#;

    #[test]
    fn test_parse_full_config() {
        let loader = ConfigLoader::from_yaml_str(SAMPLE, "inline").unwrap();
        let config = loader.config();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.jobs.len(), 2);
        assert_eq!(config.jobs[0].category, JobCategory::Engineering);
        assert_eq!(
            config.jobs[0].hourly_rate,
            Decimal::from_str("120.50").unwrap()
        );
        assert_eq!(config.jobs[1].hourly_rate, Decimal::new(25, 0));
        assert_eq!(config.employees, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loader = ConfigLoader::from_yaml_str("employees: [Zoe]\n", "inline").unwrap();
        assert_eq!(loader.config().currency, "RUB");
        assert!(loader.config().jobs.is_empty());
    }

    #[test]
    fn test_empty_document_is_default() {
        let loader = ConfigLoader::from_yaml_str("  \n", "inline").unwrap();
        assert_eq!(loader.into_config(), PayrollConfig::default());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let yaml = "jobs:\n  - category: juggling\n    hourly_rate: 10\n";
        let err = ConfigLoader::from_yaml_str(yaml, "bad.yaml").unwrap_err();
        assert!(matches!(err, PayrollError::ConfigParseError { ref path, .. } if path == "bad.yaml"));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("currancy: EUR\n", "typo.yaml").unwrap_err();
        assert!(matches!(err, PayrollError::ConfigParseError { .. }));
    }

    #[test]
    fn test_blank_currency_is_invalid() {
        let err = ConfigLoader::from_yaml_str("currency: \"  \"\n", "inline").unwrap_err();
        assert_eq!(
            err,
            PayrollError::InvalidConfig {
                message: "currency must not be blank".to_string()
            }
        );
    }

    #[test]
    fn test_blank_employee_is_invalid() {
        let err = ConfigLoader::from_yaml_str("employees: [Amy, \"\"]\n", "inline").unwrap_err();
        assert_eq!(
            err,
            PayrollError::InvalidConfig {
                message: "employees[1]: name must not be blank".to_string()
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loader = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(loader.config().employees.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = ConfigLoader::load(&path).unwrap_err();
        assert_eq!(
            err,
            PayrollError::ConfigNotFound {
                path: path.display().to_string()
            }
        );
    }
}
