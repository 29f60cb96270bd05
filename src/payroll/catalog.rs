//! Job catalog: the ordered list of job definitions.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{JobCategory, JobDefinition};

/// Ordered list of [`JobDefinition`]s used to price logged work.
///
/// Definitions are never replaced: defining a category a second time adds
/// another definition alongside the first.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    definitions: Vec<JobDefinition>,
}

impl JobCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition pricing `category` at `hourly_rate`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` when `hourly_rate <= 0` or `hourly_rate > 10000`;
    /// the catalog is unchanged in that case.
    pub fn define_job(
        &mut self,
        category: JobCategory,
        hourly_rate: Decimal,
    ) -> PayrollResult<JobDefinition> {
        let definition = JobDefinition::new(category, hourly_rate)?;
        self.definitions.push(definition);
        Ok(definition)
    }

    /// Returns all definitions in the order they were added.
    pub fn definitions(&self) -> &[JobDefinition] {
        &self.definitions
    }

    /// Returns every definition for `category`, in the order they were added.
    pub fn definitions_for(
        &self,
        category: JobCategory,
    ) -> impl Iterator<Item = &JobDefinition> + '_ {
        self.definitions
            .iter()
            .filter(move |d| d.category() == category)
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no job has been defined.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
