//! Employee directory: registered employees in insertion order.

use crate::models::Employee;

/// Registered employees, searchable by name.
///
/// Names are not unique. Lookups return the first employee registered
/// under a name, so later employees sharing that name can only be reached
/// through [`employees`](EmployeeDirectory::employees).
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new employee with an empty work log.
    pub fn add_employee(&mut self, name: impl Into<String>) -> &Employee {
        self.employees.push(Employee::new(name));
        &self.employees[self.employees.len() - 1]
    }

    /// Returns the first employee named exactly `name` (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name() == name)
    }

    /// Mutable variant of [`find_by_name`](EmployeeDirectory::find_by_name).
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.name() == name)
    }

    /// Returns true if some employee is named exactly `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Returns all employees in registration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
