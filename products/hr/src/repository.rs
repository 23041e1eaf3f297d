use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeId},
};

/// Persistence port consumed by [`crate::EmployeeService`].
///
/// Department lookups are exact and case-sensitive. Adapters return matches in
/// a stable order: ascending id for the database, insertion order in memory.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: EmployeeId) -> HrResult<Option<Employee>>;

    async fn find_by_department(&self, department: &str) -> HrResult<Vec<Employee>>;
}

/// Fixed employee list held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    /// Builds the store, rejecting records that reuse an id.
    pub fn new(employees: Vec<Employee>) -> HrResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        if let Some(dup) = employees.iter().find(|e| !seen.insert(e.id)) {
            return Err(HrError::DuplicateId(dup.id));
        }
        Ok(Self { employees })
    }

    /// Parses a JSON array of employee objects.
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let employees: Vec<Employee> = serde_json::from_str(raw)?;
        Ok(Self::new(employees)?)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("invalid employee fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] HrError),
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> HrResult<Option<Employee>> {
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_department(&self, department: &str) -> HrResult<Vec<Employee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.department == department)
            .cloned()
            .collect())
    }
}
