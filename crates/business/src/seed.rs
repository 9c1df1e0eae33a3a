//! Seed roster loaded at startup unless the caller asks for an empty store.

use rust_decimal_macros::dec;
use stafflab_core::{CoreResult, Employee, EmployeeId};

/// Build the fixed seed roster.
pub fn seed_employees() -> CoreResult<Vec<Employee>> {
    Ok(vec![
        Employee::new(
            EmployeeId::new(101)?,
            "Alice Johnson",
            29,
            "Engineering",
            dec!(72000.00),
        )?,
        Employee::new(EmployeeId::new(102)?, "Bob Smith", 41, "Finance", dec!(65500.50))?,
        Employee::new(EmployeeId::new(103)?, "Carol Lee", 35, "Marketing", dec!(58000.00))?,
    ])
}
