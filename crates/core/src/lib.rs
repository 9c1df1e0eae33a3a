//! # Stafflab Core
//!
//! Domain types dùng chung cho toàn bộ workspace:
//! - [`Employee`]: một bản ghi nhân viên, đã được validate
//! - [`EmployeeId`]: khóa duy nhất (số nguyên dương)
//! - [`input`]: parse và validate từng field nhập từ người dùng
//! - [`CoreError`]: lỗi validate

pub mod employee;
pub mod error;
pub mod input;

pub use employee::{Employee, EmployeeId};
pub use error::{CoreError, CoreResult};
