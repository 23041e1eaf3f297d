use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeId},
    repository::EmployeeRepository,
};

/// Employee lookups. Owns the not-found policy; department queries pass through.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_employee_by_id(&self, id: EmployeeId) -> HrResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(HrError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_employees_by_department(&self, department: &str) -> HrResult<Vec<Employee>> {
        self.repo.find_by_department(department).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;

    use super::*;

    /// Canned repository that records every call it receives.
    #[derive(Default)]
    struct RecordingRepository {
        by_id: Option<Employee>,
        by_department: Vec<Employee>,
        id_calls: AtomicUsize,
        department_args: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EmployeeRepository for RecordingRepository {
        async fn find_by_id(&self, id: EmployeeId) -> HrResult<Option<Employee>> {
            self.id_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.by_id.clone().filter(|e| e.id == id))
        }

        async fn find_by_department(&self, department: &str) -> HrResult<Vec<Employee>> {
            self.department_args
                .lock()
                .unwrap()
                .push(department.to_string());
            Ok(self.by_department.clone())
        }
    }

    fn it_department() -> Vec<Employee> {
        vec![
            Employee::new(1, "John Doe", "IT"),
            Employee::new(2, "Jane Smith", "IT"),
        ]
    }

    #[tokio::test]
    async fn returns_employee_when_present() {
        let repo = Arc::new(RecordingRepository {
            by_id: Some(Employee::new(1, "John Doe", "IT")),
            ..Default::default()
        });
        let service = EmployeeService::new(repo.clone());

        let employee = service.get_employee_by_id(1).await.unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.name, "John Doe");
        assert_eq!(employee.department, "IT");
        assert_eq!(repo.id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_employee_is_not_found() {
        let repo = Arc::new(RecordingRepository::default());
        let service = EmployeeService::new(repo.clone());

        let err = service.get_employee_by_id(999).await.unwrap_err();
        assert!(matches!(err, HrError::NotFound(999)));
        assert_eq!(err.to_string(), "Employee not found with id: 999");
        assert_eq!(repo.id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn department_list_passes_through_unchanged() {
        let repo = Arc::new(RecordingRepository {
            by_department: it_department(),
            ..Default::default()
        });
        let service = EmployeeService::new(repo.clone());

        let employees = service.get_employees_by_department("IT").await.unwrap();
        assert_eq!(employees, it_department());
        assert_eq!(*repo.department_args.lock().unwrap(), vec!["IT".to_string()]);
    }

    #[tokio::test]
    async fn empty_department_is_not_an_error() {
        let service = EmployeeService::new(Arc::new(RecordingRepository::default()));
        let employees = service.get_employees_by_department("Nowhere").await.unwrap();
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn repository_failures_propagate() {
        struct BrokenRepository;

        #[async_trait]
        impl EmployeeRepository for BrokenRepository {
            async fn find_by_id(&self, _id: EmployeeId) -> HrResult<Option<Employee>> {
                Err(sea_orm::DbErr::Custom("connection reset".into()).into())
            }

            async fn find_by_department(&self, _department: &str) -> HrResult<Vec<Employee>> {
                Err(sea_orm::DbErr::Custom("connection reset".into()).into())
            }
        }

        let service = EmployeeService::new(Arc::new(BrokenRepository));
        let err = service.get_employee_by_id(1).await.unwrap_err();
        assert!(matches!(err, HrError::Database(_)));
        assert!(service.get_employees_by_department("IT").await.is_err());
    }
}
