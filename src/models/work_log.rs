//! Per-employee log of performed work.

use serde::Serialize;

use crate::error::PayrollResult;

use super::{JobCategory, WorkEntry};

/// An ordered, append-only list of [`WorkEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkLog {
    entries: Vec<WorkEntry>,
}

impl WorkLog {
    /// Creates an empty work log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry for `hours` worked in `category`.
    ///
    /// The log is left unchanged when the hours are rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHours` when `hours` is outside `1..=200`.
    pub fn log_work(&mut self, category: JobCategory, hours: i64) -> PayrollResult<WorkEntry> {
        let entry = WorkEntry::new(category, hours)?;
        self.entries.push(entry);
        Ok(entry)
    }

    /// Returns the entries in the order they were logged.
    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    /// Returns the number of logged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no work has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
