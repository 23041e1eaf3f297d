use async_trait::async_trait;
use entity::employees;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::{
    error::HrResult,
    model::{Employee, EmployeeId},
    repository::EmployeeRepository,
};

/// Reads the `employees` table through sea-orm.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> HrResult<Option<Employee>> {
        let record = employees::Entity::find_by_id(id).one(&self.db).await?;
        Ok(record.map(Employee::from))
    }

    async fn find_by_department(&self, department: &str) -> HrResult<Vec<Employee>> {
        let records = employees::Entity::find()
            .filter(employees::Column::Department.eq(department))
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;
        debug!(department, matches = records.len(), "department lookup");
        Ok(records.into_iter().map(Employee::from).collect())
    }
}
