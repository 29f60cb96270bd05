//! Salary calculation functionality.
//!
//! This module joins an employee's work log against the job catalog. Every
//! work entry is priced once per job definition sharing its category, so a
//! category with two definitions pays its hours at both rates.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, JobDefinition, SalaryBreakdown, SalaryLine,
};
use crate::payroll::JobCatalog;

/// Warning code for an entry whose category has no job definition.
pub const UNPRICED_ENTRY_WARNING: &str = "UNPRICED_ENTRY";

/// Warning code for an entry priced by more than one job definition.
pub const DUPLICATE_DEFINITION_WARNING: &str = "DUPLICATE_JOB_DEFINITION";

/// Computes an employee's salary with a full line-by-line breakdown.
///
/// For every entry in the employee's work log and every definition in the
/// catalog whose category equals the entry's category, a [`SalaryLine`]
/// of `hours * hourly_rate` is produced. Entries with no matching definition
/// contribute zero; entries with several matching definitions contribute
/// once per definition. Both cases are recorded as audit warnings.
///
/// # Arguments
///
/// * `employee` - The employee whose work log is priced
/// * `catalog` - The job definitions to price against
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_salary_breakdown;
/// use payroll_engine::models::{Employee, JobCategory};
/// use payroll_engine::payroll::JobCatalog;
/// use rust_decimal::Decimal;
///
/// let mut catalog = JobCatalog::new();
/// catalog.define_job(JobCategory::Engineering, Decimal::new(100, 0)).unwrap();
///
/// let mut employee = Employee::new("Alice");
/// employee.log_work(JobCategory::Engineering, 10).unwrap();
///
/// let breakdown = compute_salary_breakdown(&employee, &catalog);
/// assert_eq!(breakdown.total, Decimal::new(1000, 0));
/// assert_eq!(breakdown.lines.len(), 1);
/// ```
pub fn compute_salary_breakdown(employee: &Employee, catalog: &JobCatalog) -> SalaryBreakdown {
    let mut lines = Vec::new();
    let mut audit_trace = AuditTrace::default();

    for (entry_index, entry) in employee.work_log().entries().iter().enumerate() {
        let matches: Vec<&JobDefinition> = catalog.definitions_for(entry.category()).collect();
        let hours = entry.hours_decimal();

        let entry_lines: Vec<SalaryLine> = matches
            .iter()
            .map(|definition| SalaryLine {
                entry_index,
                category: entry.category(),
                hours: entry.hours(),
                rate: definition.hourly_rate(),
                amount: hours * definition.hourly_rate(),
            })
            .collect();
        let entry_amount: Decimal = entry_lines.iter().map(|line| line.amount).sum();

        let reasoning = if entry_lines.is_empty() {
            format!(
                "No job definition for {}; {}h contributes 0",
                entry.category(),
                entry.hours()
            )
        } else {
            let terms: Vec<String> = entry_lines
                .iter()
                .map(|line| format!("{}h x {}", line.hours, line.rate.normalize()))
                .collect();
            format!("{} = {}", terms.join(" + "), entry_amount.normalize())
        };

        audit_trace.steps.push(AuditStep {
            step_number: u32::try_from(entry_index + 1).unwrap_or(u32::MAX),
            rule_id: "category_join".to_string(),
            rule_name: "Category Join".to_string(),
            input: serde_json::json!({
                "entry_index": entry_index,
                "category": entry.category(),
                "hours": entry.hours()
            }),
            output: serde_json::json!({
                "matched_definitions": entry_lines.len(),
                "rates": entry_lines.iter().map(|l| l.rate.to_string()).collect::<Vec<_>>(),
                "amount": entry_amount.to_string()
            }),
            reasoning,
        });

        match matches.len() {
            0 => audit_trace.warnings.push(AuditWarning {
                code: UNPRICED_ENTRY_WARNING.to_string(),
                message: format!(
                    "Entry {} ({}, {}h) has no job definition and was not paid",
                    entry_index,
                    entry.category(),
                    entry.hours()
                ),
            }),
            1 => {}
            n => audit_trace.warnings.push(AuditWarning {
                code: DUPLICATE_DEFINITION_WARNING.to_string(),
                message: format!(
                    "Entry {} ({}, {}h) was priced by {} job definitions",
                    entry_index,
                    entry.category(),
                    entry.hours(),
                    n
                ),
            }),
        }

        lines.extend(entry_lines);
    }

    let total: Decimal = lines.iter().map(|line| line.amount).sum();

    debug!(
        employee_id = %employee.id(),
        employee = employee.name(),
        entries = employee.work_log().len(),
        lines = lines.len(),
        total = %total,
        "Computed salary"
    );

    SalaryBreakdown {
        employee_id: employee.id(),
        employee_name: employee.name().to_string(),
        lines,
        total,
        audit_trace,
    }
}

/// Computes an employee's salary total.
///
/// Equivalent to `compute_salary_breakdown(employee, catalog).total`.
pub fn compute_salary(employee: &Employee, catalog: &JobCatalog) -> Decimal {
    compute_salary_breakdown(employee, catalog).total
}
