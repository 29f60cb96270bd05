//! Payroll service: the facade over the job catalog and employee directory.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{compute_salary, compute_salary_breakdown};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Employee, EmployeeId, JobCategory, JobDefinition, SalaryLookup, WorkEntry,
};

use super::{EmployeeDirectory, JobCatalog};

/// Currency label used when none is configured.
pub const DEFAULT_CURRENCY: &str = "RUB";

/// Owns all payroll state and exposes the add and query operations.
///
/// A process normally constructs one `PayrollService` and hands it to the
/// command loop by mutable reference. Mutating operations take `&mut self`,
/// so callers always have exclusive access while state changes.
///
/// # Example
///
/// ```
/// use payroll_engine::models::JobCategory;
/// use payroll_engine::payroll::PayrollService;
/// use rust_decimal::Decimal;
///
/// let mut payroll = PayrollService::new();
/// payroll.define_job(JobCategory::Engineering, Decimal::new(100, 0)).unwrap();
/// payroll.register_employee("Alice");
/// payroll.record_work("Alice", JobCategory::Engineering, 10).unwrap();
///
/// assert_eq!(payroll.salary_for("Alice").amount(), Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollService {
    catalog: JobCatalog,
    directory: EmployeeDirectory,
    currency: String,
}

impl Default for PayrollService {
    fn default() -> Self {
        Self::new()
    }
}

impl PayrollService {
    /// Creates an empty payroll using the default currency label.
    pub fn new() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }

    /// Creates an empty payroll reporting amounts in `currency`.
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            catalog: JobCatalog::new(),
            directory: EmployeeDirectory::new(),
            currency: currency.into(),
        }
    }

    /// Creates a payroll seeded with the jobs and employees in `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a configured job carries a rate outside
    /// `(0, 10000]`.
    pub fn from_config(config: &PayrollConfig) -> PayrollResult<Self> {
        let mut service = Self::with_currency(config.currency.clone());

        for (index, job) in config.jobs.iter().enumerate() {
            service
                .define_job(job.category, job.hourly_rate)
                .map_err(|err| PayrollError::InvalidConfig {
                    message: format!("jobs[{}]: {}", index, err),
                })?;
        }

        for name in &config.employees {
            service.register_employee(name.clone());
        }

        info!(
            jobs = service.catalog.len(),
            employees = service.directory.len(),
            currency = %service.currency,
            "Payroll seeded from configuration"
        );

        Ok(service)
    }

    /// Defines a job category at an hourly rate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` when `rate <= 0` or `rate > 10000`. Nothing is
    /// added in that case.
    pub fn define_job(
        &mut self,
        category: JobCategory,
        rate: Decimal,
    ) -> PayrollResult<JobDefinition> {
        let already_defined = self.catalog.definitions_for(category).count();

        match self.catalog.define_job(category, rate) {
            Ok(definition) => {
                if already_defined > 0 {
                    warn!(
                        category = %category,
                        existing = already_defined,
                        "Category already defined; hours in it will be paid at every defined rate"
                    );
                }
                info!(category = %category, rate = %rate, "Job defined");
                Ok(definition)
            }
            Err(err) => {
                warn!(category = %category, rate = %rate, error = %err, "Job definition rejected");
                Err(err)
            }
        }
    }

    /// Registers a new employee and returns their id.
    ///
    /// Registering a name that is already taken creates a second, separate
    /// employee that name lookups will not reach.
    pub fn register_employee(&mut self, name: impl Into<String>) -> EmployeeId {
        let name = name.into();
        if self.directory.contains_name(&name) {
            warn!(employee = %name, "Employee name already registered; lookups keep resolving to the first");
        }

        let employee = self.directory.add_employee(name);
        info!(employee_id = %employee.id(), employee = employee.name(), "Employee registered");
        employee.id()
    }

    /// Logs `hours` worked in `category` for the employee named `name`.
    ///
    /// # Errors
    ///
    /// * `EmployeeNotFound` if nobody is registered under `name`
    /// * `InvalidHours` if `hours` is outside `1..=200`
    ///
    /// State is unchanged on either error.
    pub fn record_work(
        &mut self,
        name: &str,
        category: JobCategory,
        hours: i64,
    ) -> PayrollResult<WorkEntry> {
        let Some(employee) = self.directory.find_by_name_mut(name) else {
            warn!(employee = %name, "Employee not found");
            return Err(PayrollError::EmployeeNotFound {
                name: name.to_string(),
            });
        };

        match employee.log_work(category, hours) {
            Ok(entry) => {
                info!(
                    employee_id = %employee.id(),
                    employee = %name,
                    category = %category,
                    hours,
                    "Work recorded"
                );
                Ok(entry)
            }
            Err(err) => {
                warn!(employee = %name, category = %category, hours, error = %err, "Work entry rejected");
                Err(err)
            }
        }
    }

    /// Computes the salary of the employee named `name`.
    ///
    /// Returns [`SalaryLookup::NotFound`] when nobody is registered under
    /// that name; its amount is zero.
    pub fn salary_for(&self, name: &str) -> SalaryLookup {
        match self.directory.find_by_name(name) {
            Some(employee) => {
                SalaryLookup::Found(compute_salary_breakdown(employee, &self.catalog))
            }
            None => {
                warn!(employee = %name, "Employee not found");
                SalaryLookup::NotFound {
                    name: name.to_string(),
                }
            }
        }
    }

    /// Returns the sum of every registered employee's salary.
    ///
    /// Employees sharing a name are each counted.
    pub fn total_payroll(&self) -> Decimal {
        self.directory
            .employees()
            .iter()
            .map(|employee| compute_salary(employee, &self.catalog))
            .sum()
    }

    /// Returns all employees in registration order.
    pub fn list_employees(&self) -> &[Employee] {
        self.directory.employees()
    }

    /// Returns the job catalog.
    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Returns all job definitions in the order they were added.
    pub fn jobs(&self) -> &[JobDefinition] {
        self.catalog.definitions()
    }

    /// Returns the currency label amounts are reported in.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DUPLICATE_DEFINITION_WARNING;
    use crate::config::JobSeed;
    use std::io;
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// In-memory log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` and returns everything logged at `WARN` or above.
    fn capture_warnings(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_second_definition_of_category_warns() {
        let mut payroll = PayrollService::new();
        let first = capture_warnings(|| {
            payroll.define_job(JobCategory::Engineering, dec("100")).unwrap();
        });
        assert!(first.is_empty(), "{}", first);

        let second = capture_warnings(|| {
            payroll.define_job(JobCategory::Engineering, dec("50")).unwrap();
        });
        assert!(second.contains("WARN"), "{}", second);
        assert!(second.contains("Category already defined"), "{}", second);
        assert!(second.contains("existing=1"), "{}", second);
    }

    #[test]
    fn test_duplicate_definition_reaches_audit_trace() {
        let mut payroll = PayrollService::new();
        payroll.define_job(JobCategory::Engineering, dec("100")).unwrap();
        payroll.define_job(JobCategory::Engineering, dec("50")).unwrap();
        payroll.register_employee("Alice");
        payroll.record_work("Alice", JobCategory::Engineering, 10).unwrap();

        let lookup = payroll.salary_for("Alice");
        let breakdown = lookup.breakdown().unwrap();
        assert_eq!(breakdown.total, dec("1500"));
        assert_eq!(breakdown.audit_trace.warnings.len(), 1);
        assert_eq!(
            breakdown.audit_trace.warnings[0].code,
            DUPLICATE_DEFINITION_WARNING
        );
    }

    #[test]
    fn test_duplicate_name_registration_warns() {
        let mut payroll = PayrollService::new();
        let first = capture_warnings(|| {
            payroll.register_employee("Sam");
        });
        assert!(first.is_empty(), "{}", first);

        let second = capture_warnings(|| {
            payroll.register_employee("Sam");
        });
        assert!(second.contains("WARN"), "{}", second);
        assert!(second.contains("Employee name already registered"), "{}", second);
        assert!(second.contains("employee=Sam"), "{}", second);
    }

    #[test]
    fn test_new_service_is_empty() {
        let payroll = PayrollService::new();
        assert!(payroll.jobs().is_empty());
        assert!(payroll.list_employees().is_empty());
        assert_eq!(payroll.total_payroll(), Decimal::ZERO);
        assert_eq!(payroll.currency(), "RUB");
    }

    #[test]
    fn test_define_job_rejects_invalid_rate() {
        let mut payroll = PayrollService::new();
        assert_eq!(
            payroll.define_job(JobCategory::Engineering, dec("0")),
            Err(PayrollError::InvalidRate { rate: dec("0") })
        );
        assert!(payroll.jobs().is_empty());
    }

    #[test]
    fn test_record_work_for_unknown_employee() {
        let mut payroll = PayrollService::new();
        payroll.register_employee("Alice");

        let result = payroll.record_work("Bob", JobCategory::Cleaning, 5);
        assert_eq!(
            result,
            Err(PayrollError::EmployeeNotFound {
                name: "Bob".to_string()
            })
        );
        assert!(payroll.list_employees()[0].work_log().is_empty());
    }

    #[test]
    fn test_record_work_surfaces_invalid_hours() {
        let mut payroll = PayrollService::new();
        payroll.register_employee("Alice");

        assert_eq!(
            payroll.record_work("Alice", JobCategory::Cleaning, 201),
            Err(PayrollError::InvalidHours { hours: 201 })
        );
        assert!(payroll.list_employees()[0].work_log().is_empty());
    }

    #[test]
    fn test_salary_for_registered_employee_without_work() {
        let mut payroll = PayrollService::new();
        payroll.define_job(JobCategory::Engineering, dec("100")).unwrap();
        payroll.register_employee("Alice");

        let lookup = payroll.salary_for("Alice");
        assert!(lookup.is_found());
        assert_eq!(lookup.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_salary_for_unknown_employee() {
        let payroll = PayrollService::new();
        let lookup = payroll.salary_for("unknown");
        assert_eq!(
            lookup,
            SalaryLookup::NotFound {
                name: "unknown".to_string()
            }
        );
        assert_eq!(lookup.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_duplicate_names_are_counted_separately() {
        let mut payroll = PayrollService::new();
        payroll.define_job(JobCategory::Cleaning, dec("20")).unwrap();
        let first = payroll.register_employee("Sam");
        let second = payroll.register_employee("Sam");
        assert_ne!(first, second);

        // Both entries land on the first Sam.
        payroll.record_work("Sam", JobCategory::Cleaning, 10).unwrap();
        payroll.record_work("Sam", JobCategory::Cleaning, 5).unwrap();

        assert_eq!(payroll.salary_for("Sam").amount(), dec("300"));
        assert_eq!(payroll.list_employees()[1].work_log().len(), 0);
        assert_eq!(payroll.total_payroll(), dec("300"));
    }

    #[test]
    fn test_from_config_seeds_state() {
        let config = PayrollConfig {
            currency: "EUR".to_string(),
            jobs: vec![JobSeed {
                category: JobCategory::Management,
                hourly_rate: dec("80"),
            }],
            employees: vec!["Ivy".to_string(), "Jon".to_string()],
        };

        let payroll = PayrollService::from_config(&config).unwrap();
        assert_eq!(payroll.currency(), "EUR");
        assert_eq!(payroll.jobs().len(), 1);
        assert_eq!(payroll.list_employees().len(), 2);
    }

    #[test]
    fn test_from_config_rejects_bad_rate() {
        let config = PayrollConfig {
            currency: "RUB".to_string(),
            jobs: vec![
                JobSeed {
                    category: JobCategory::Management,
                    hourly_rate: dec("80"),
                },
                JobSeed {
                    category: JobCategory::Cleaning,
                    hourly_rate: dec("20000"),
                },
            ],
            employees: vec![],
        };

        let err = PayrollService::from_config(&config).unwrap_err();
        match err {
            PayrollError::InvalidConfig { message } => {
                assert!(message.starts_with("jobs[1]:"), "{}", message);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
