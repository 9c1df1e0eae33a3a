//! # Employee Module
//!
//! Định nghĩa [`EmployeeId`] và [`Employee`].
//!
//! Một `Employee` chỉ được tạo qua [`Employee::new`], nên mọi instance
//! đều đã thỏa các ràng buộc: id và age dương, name/department khác rỗng,
//! salary không âm.

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Khóa duy nhất của nhân viên (số nguyên dương).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Tạo EmployeeId, từ chối 0
    pub fn new(value: u32) -> CoreResult<Self> {
        if value == 0 {
            return Err(CoreError::InvalidId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bản ghi nhân viên.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// ID duy nhất
    pub id: EmployeeId,
    /// Tên đầy đủ
    pub name: String,
    /// Tuổi
    pub age: u32,
    /// Phòng ban
    pub department: String,
    /// Lương (serialize thành String trong JSON)
    pub salary: Decimal,
}

impl Employee {
    /// Tạo Employee mới sau khi validate từng field
    pub fn new(
        id: EmployeeId,
        name: &str,
        age: u32,
        department: &str,
        salary: Decimal,
    ) -> CoreResult<Self> {
        let name = crate::input::require_text("Name", name)?;
        let department = crate::input::require_text("Department", department)?;

        if age == 0 {
            return Err(CoreError::InvalidAge(age.to_string()));
        }
        if salary < Decimal::ZERO {
            return Err(CoreError::NegativeSalary(salary.to_string()));
        }

        Ok(Self {
            id,
            name,
            age,
            department,
            salary,
        })
    }

    /// Salary hiển thị với đúng 2 chữ số thập phân (làm tròn half-up)
    pub fn salary_display(&self) -> String {
        let rounded = self
            .salary
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }
}
