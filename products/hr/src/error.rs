use sea_orm::DbErr;
use thiserror::Error;

use crate::model::EmployeeId;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("Employee not found with id: {0}")]
    NotFound(EmployeeId),
    #[error("duplicate employee id: {0}")]
    DuplicateId(EmployeeId),
    #[error("employee store error: {0}")]
    Database(#[from] DbErr),
}
