//! # Stafflab Business
//!
//! Business logic layer - the in-memory employee record store and its
//! seed roster.

pub mod error;
pub mod seed;
pub mod store;

pub use error::{BusinessError, BusinessResult};
pub use store::EmployeeStore;
