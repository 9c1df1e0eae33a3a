//! # Error Module
//!
//! Định nghĩa các lỗi validate cho Stafflab sử dụng thiserror.
//!
//! Message của mỗi lỗi được hiển thị trực tiếp cho người dùng khi menu
//! yêu cầu nhập lại.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Employee ID must be a positive integer, got '{0}'")]
    InvalidId(String),

    #[error("Age must be a positive integer, got '{0}'")]
    InvalidAge(String),

    #[error("Salary must be a number, got '{0}'")]
    InvalidSalary(String),

    #[error("Salary is out of range: {0}")]
    SalaryOutOfRange(String),

    #[error("Salary cannot be negative: {0}")]
    NegativeSalary(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;
