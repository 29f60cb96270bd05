//! Salary result models for the payroll engine.
//!
//! This module contains the [`SalaryBreakdown`] type and its associated
//! structures that capture the output of joining an employee's work log
//! against the job catalog: salary lines, the total, and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, JobCategory};

/// A single priced line in a salary calculation.
///
/// One line is produced for every (work entry, job definition) pair whose
/// categories match. An entry whose category has two definitions therefore
/// produces two lines.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{JobCategory, SalaryLine};
/// use rust_decimal::Decimal;
///
/// let line = SalaryLine {
///     entry_index: 0,
///     category: JobCategory::Engineering,
///     hours: 10,
///     rate: Decimal::new(100, 0),
///     amount: Decimal::new(1000, 0),
/// };
/// assert_eq!(line.amount, line.rate * Decimal::from(line.hours));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryLine {
    /// Position of the originating entry in the employee's work log.
    pub entry_index: usize,
    /// The job category of the entry and the matched definition.
    pub category: JobCategory,
    /// The hours logged on the entry.
    pub hours: u32,
    /// The hourly rate of the matched definition.
    pub rate: Decimal,
    /// The amount for this line (hours * rate).
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were priced according to the join rules but
/// probably not the way the operator intended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a salary calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of computing one employee's salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The employee the salary was computed for.
    pub employee_id: EmployeeId,
    /// The employee's name.
    pub employee_name: String,
    /// Individual priced lines, in work-log order.
    pub lines: Vec<SalaryLine>,
    /// The salary total (sum of all line amounts).
    pub total: Decimal,
    /// Audit trace of the join decisions.
    pub audit_trace: AuditTrace,
}

/// Outcome of looking up an employee's salary by name.
///
/// A missing employee and an employee who earned nothing both have an
/// [`amount`](SalaryLookup::amount) of zero; the variant tells them apart.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryLookup;
/// use rust_decimal::Decimal;
///
/// let lookup = SalaryLookup::NotFound { name: "Zed".to_string() };
/// assert!(!lookup.is_found());
/// assert_eq!(lookup.amount(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SalaryLookup {
    /// The employee was found and their salary computed.
    Found(SalaryBreakdown),
    /// No employee with the requested name is registered.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl SalaryLookup {
    /// Returns the salary amount, or zero when the employee was not found.
    pub fn amount(&self) -> Decimal {
        match self {
            SalaryLookup::Found(breakdown) => breakdown.total,
            SalaryLookup::NotFound { .. } => Decimal::ZERO,
        }
    }

    /// Returns true if the employee was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SalaryLookup::Found(_))
    }

    /// Returns the breakdown if the employee was found.
    pub fn breakdown(&self) -> Option<&SalaryBreakdown> {
        match self {
            SalaryLookup::Found(breakdown) => Some(breakdown),
            SalaryLookup::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown(total: Decimal) -> SalaryBreakdown {
        SalaryBreakdown {
            employee_id: EmployeeId::new(),
            employee_name: "Alice".to_string(),
            lines: vec![SalaryLine {
                entry_index: 0,
                category: JobCategory::Engineering,
                hours: 10,
                rate: dec("100"),
                amount: total,
            }],
            total,
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_found_lookup_amount_is_total() {
        let lookup = SalaryLookup::Found(create_sample_breakdown(dec("1000")));
        assert!(lookup.is_found());
        assert_eq!(lookup.amount(), dec("1000"));
        assert_eq!(lookup.breakdown().unwrap().employee_name, "Alice");
    }

    #[test]
    fn test_not_found_amount_matches_zero_salary() {
        let missing = SalaryLookup::NotFound {
            name: "Ghost".to_string(),
        };
        let zero = SalaryLookup::Found(create_sample_breakdown(Decimal::ZERO));

        assert_eq!(missing.amount(), zero.amount());
        assert_ne!(missing.is_found(), zero.is_found());
        assert!(missing.breakdown().is_none());
    }

    #[test]
    fn test_salary_line_serialization() {
        let line = SalaryLine {
            entry_index: 2,
            category: JobCategory::Cleaning,
            hours: 8,
            rate: dec("25.50"),
            amount: dec("204.00"),
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"entry_index\":2"));
        assert!(json.contains("\"category\":\"cleaning\""));
        assert!(json.contains("\"rate\":\"25.50\""));
        assert!(json.contains("\"amount\":\"204.00\""));
    }

    #[test]
    fn test_lookup_serialization_is_tagged() {
        let missing = SalaryLookup::NotFound {
            name: "Ghost".to_string(),
        };
        let json = serde_json::to_value(&missing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "not_found", "name": "Ghost"})
        );

        let found = SalaryLookup::Found(create_sample_breakdown(dec("1000")));
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["total"], "1000");
    }
}
