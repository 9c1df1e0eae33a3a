//! # Stafflab Reports
//!
//! Renders the employee roster as an aligned text table.
//!
//! - [`ReportData`] - headers and rows of any tabular report
//! - [`EmployeeReport`] - the roster adapter
//! - [`TableFormatter`] - aligned text table for the terminal
//!
//! ## Example
//!
//! ```rust,ignore
//! use stafflab_reports::{EmployeeReport, TableFormatter};
//!
//! let report = EmployeeReport::new(store.list());
//! print!("{}", TableFormatter::new().render(&report));
//! ```

pub mod report;
pub mod table;

pub use report::{EmployeeReport, ReportData};
pub use table::{column_widths, TableFormatter};
