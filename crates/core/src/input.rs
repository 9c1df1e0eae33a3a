//! Field parsing for values typed at the prompt.
//!
//! Every parser trims its input first. Errors carry the raw text so the
//! menu can echo it back when it asks again.

use crate::employee::EmployeeId;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a positive integer employee ID.
pub fn parse_id(raw: &str) -> CoreResult<EmployeeId> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<u32>()
        .map_err(|_| CoreError::InvalidId(trimmed.to_string()))?;
    EmployeeId::new(value).map_err(|_| CoreError::InvalidId(trimmed.to_string()))
}

/// Parse a positive integer age.
pub fn parse_age(raw: &str) -> CoreResult<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(CoreError::InvalidAge(trimmed.to_string())),
    }
}

/// Parse a non-negative salary.
///
/// Accepts plain decimals (`45000.50`) and scientific notation (`4.5e4`).
/// Numbers too large for `Decimal` get their own error.
pub fn parse_salary(raw: &str) -> CoreResult<Decimal> {
    let trimmed = raw.trim();
    let salary = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(salary) => salary,
        // Well-formed but beyond what Decimal can hold
        Err(_) if trimmed.parse::<f64>().is_ok_and(f64::is_finite) => {
            return Err(CoreError::SalaryOutOfRange(trimmed.to_string()));
        }
        Err(_) => return Err(CoreError::InvalidSalary(trimmed.to_string())),
    };

    if salary < Decimal::ZERO {
        return Err(CoreError::NegativeSalary(trimmed.to_string()));
    }
    Ok(salary)
}

/// Require a non-empty text field, returning it trimmed.
pub fn require_text(field: &'static str, raw: &str) -> CoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
