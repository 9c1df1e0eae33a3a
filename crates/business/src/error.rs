//! Business layer errors

use stafflab_core::{CoreError, EmployeeId};
use thiserror::Error;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessError {
    #[error("Employee ID {0} already exists")]
    DuplicateId(EmployeeId),

    #[error("Employee with ID {0} not found")]
    NotFound(EmployeeId),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for store operations
pub type BusinessResult<T> = Result<T, BusinessError>;
