//! The interactive numbered-menu loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::PayrollError;
use crate::models::{JobCategory, MAX_WORK_HOURS, MIN_WORK_HOURS};
use crate::payroll::PayrollService;

use super::TokenReader;

/// The menu printed when the loop starts.
pub const MENU: &str = "Menu:
1. Add Job Type
2. Add Employee
3. Add Performed Job
4. Calculate Employee Salary
5. Calculate Total Salaries
6. Display All Employees
7. Exit";

const CATEGORY_PROMPT: &str = "(0=Engineering, 1=Cleaning, 2=Accounting, 3=Management)";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add Job Type
    AddJobType,
    /// 2. Add Employee
    AddEmployee,
    /// 3. Add Performed Job
    AddPerformedJob,
    /// 4. Calculate Employee Salary
    EmployeeSalary,
    /// 5. Calculate Total Salaries
    TotalSalaries,
    /// 6. Display All Employees
    DisplayEmployees,
    /// 7. Exit
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to a choice.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::AddJobType),
            2 => Some(MenuChoice::AddEmployee),
            3 => Some(MenuChoice::AddPerformedJob),
            4 => Some(MenuChoice::EmployeeSalary),
            5 => Some(MenuChoice::TotalSalaries),
            6 => Some(MenuChoice::DisplayEmployees),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads menu choices from an input, dispatches them to a
/// [`PayrollService`] and writes results to an output.
///
/// Rejected input is reported and the loop carries on; only I/O errors on
/// the underlying streams end it early.
///
/// # Example
///
/// ```
/// use payroll_engine::cli::CommandLoop;
/// use payroll_engine::payroll::PayrollService;
///
/// let mut payroll = PayrollService::new();
/// let mut output = Vec::new();
/// let input = "1 0 100\n2 Alice\n3 Alice 0 10\n4 Alice\n7\n";
///
/// CommandLoop::new(&mut payroll, input.as_bytes(), &mut output).run().unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Total salary for employee Alice: 1000.00 RUB."));
/// ```
pub struct CommandLoop<'a, R, W> {
    payroll: &'a mut PayrollService,
    input: TokenReader<R>,
    output: W,
}

impl<'a, R: BufRead, W: Write> CommandLoop<'a, R, W> {
    /// Creates a loop driving `payroll` from `input`, writing to `output`.
    pub fn new(payroll: &'a mut PayrollService, input: R, output: W) -> Self {
        Self {
            payroll,
            input: TokenReader::new(input),
            output,
        }
    }

    /// Runs until the exit choice is made or the input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", MENU)?;

        loop {
            write!(self.output, "\nEnter your choice: ")?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                debug!("Input exhausted; leaving command loop");
                writeln!(self.output)?;
                return Ok(());
            };

            let Some(choice) = token.parse::<i64>().ok().and_then(MenuChoice::from_number) else {
                self.reject("Invalid choice. Try again.")?;
                continue;
            };

            debug!(?choice, "Menu choice");
            if self.dispatch(choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddJobType => self.add_job_type()?,
            MenuChoice::AddEmployee => self.add_employee()?,
            MenuChoice::AddPerformedJob => self.add_performed_job()?,
            MenuChoice::EmployeeSalary => self.employee_salary()?,
            MenuChoice::TotalSalaries => self.total_salaries()?,
            MenuChoice::DisplayEmployees => self.display_employees()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting program.")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn add_job_type(&mut self) -> io::Result<()> {
        write!(self.output, "Enter job type {}: ", CATEGORY_PROMPT)?;
        self.output.flush()?;
        let Some(category) = self.read_category()? else {
            return Ok(());
        };

        write!(self.output, "Enter hourly rate (1 to 10,000): ")?;
        self.output.flush()?;
        let Some(rate) = self.read_number::<Decimal>()? else {
            return Ok(());
        };

        match self.payroll.define_job(category, rate) {
            Ok(definition) => writeln!(
                self.output,
                "Job type {} added at {} {} per hour.",
                definition.category(),
                definition.hourly_rate(),
                self.payroll.currency()
            ),
            Err(_) => self.reject("Invalid rate. Please try again."),
        }
    }

    fn add_employee(&mut self) -> io::Result<()> {
        write!(self.output, "Enter employee name: ")?;
        self.output.flush()?;
        let Some(name) = self.input.next_token()? else {
            return Ok(());
        };

        self.payroll.register_employee(name.as_str());
        writeln!(self.output, "Employee {} added.", name)
    }

    fn add_performed_job(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "Enter employee name, job type {}, and hours worked (1 to 200): ",
            CATEGORY_PROMPT
        )?;
        self.output.flush()?;
        let Some(name) = self.input.next_token()? else {
            return Ok(());
        };
        let Some(category) = self.read_category()? else {
            return Ok(());
        };
        let Some(hours) = self.read_number::<i64>()? else {
            return Ok(());
        };
        // Hours are range-checked before the name is looked up.
        if !(MIN_WORK_HOURS..=MAX_WORK_HOURS).contains(&hours) {
            return self.reject("Invalid number of hours. Please try again.");
        }

        match self.payroll.record_work(&name, category, hours) {
            Ok(entry) => writeln!(
                self.output,
                "Recorded {} hours of {} for {}.",
                entry.hours(),
                entry.category(),
                name
            ),
            Err(PayrollError::InvalidHours { .. }) => {
                self.reject("Invalid number of hours. Please try again.")
            }
            Err(_) => self.reject("Employee not found."),
        }
    }

    fn employee_salary(&mut self) -> io::Result<()> {
        write!(self.output, "Enter employee name: ")?;
        self.output.flush()?;
        let Some(name) = self.input.next_token()? else {
            return Ok(());
        };

        let lookup = self.payroll.salary_for(&name);
        match lookup.breakdown() {
            Some(breakdown) => writeln!(
                self.output,
                "Total salary for employee {}: {:.2} {}.",
                name,
                breakdown.total,
                self.payroll.currency()
            ),
            None => self.reject("Employee not found."),
        }
    }

    fn total_salaries(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Total salaries for all employees: {:.2} {}.",
            self.payroll.total_payroll(),
            self.payroll.currency()
        )
    }

    fn display_employees(&mut self) -> io::Result<()> {
        let employees = self.payroll.list_employees();
        if employees.is_empty() {
            return writeln!(self.output, "No employees registered.");
        }

        for employee in employees {
            writeln!(self.output, "Employee: {}", employee.name())?;
            for entry in employee.work_log().entries() {
                writeln!(
                    self.output,
                    "  Job type: {}, Hours: {}",
                    entry.category(),
                    entry.hours()
                )?;
            }
        }
        Ok(())
    }

    /// Reads a category code, reporting codes outside `0..=3`.
    fn read_category(&mut self) -> io::Result<Option<JobCategory>> {
        let Some(code) = self.read_number::<i64>()? else {
            return Ok(None);
        };

        match JobCategory::from_code(code) {
            Ok(category) => Ok(Some(category)),
            Err(_) => {
                self.reject("Invalid job type. Please try again.")?;
                Ok(None)
            }
        }
    }

    /// Reads and parses one token. `None` means end of input or a token
    /// that did not parse; the latter has already been reported.
    fn read_number<T: FromStr>(&mut self) -> io::Result<Option<T>> {
        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };

        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.reject("Invalid input. Please try again.")?;
                Ok(None)
            }
        }
    }

    /// Reports rejected input and drops the rest of the offending line.
    fn reject(&mut self, message: &str) -> io::Result<()> {
        self.input.discard_pending();
        writeln!(self.output, "{}", message)
    }
}
