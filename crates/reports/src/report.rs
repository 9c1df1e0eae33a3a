//! Tabular report data.

use stafflab_core::Employee;

/// Trait for data that can be rendered as a table
pub trait ReportData {
    /// Get column headers
    fn headers(&self) -> Vec<String>;

    /// Get data rows, one cell per header
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Employee roster, in the order the caller supplied
#[derive(Debug, Clone)]
pub struct EmployeeReport {
    pub employees: Vec<Employee>,
}

impl EmployeeReport {
    pub fn new<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
        Self {
            employees: employees.into_iter().cloned().collect(),
        }
    }
}

impl ReportData for EmployeeReport {
    fn headers(&self) -> Vec<String> {
        vec![
            "ID".to_string(),
            "Name".to_string(),
            "Age".to_string(),
            "Department".to_string(),
            "Salary".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.employees
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.name.clone(),
                    e.age.to_string(),
                    e.department.clone(),
                    e.salary_display(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stafflab_core::EmployeeId;

    #[test]
    fn test_employee_rows() {
        let employees = vec![
            Employee::new(EmployeeId::new(102).unwrap(), "Bob", 41, "Finance", dec!(65500.5))
                .unwrap(),
            Employee::new(EmployeeId::new(7).unwrap(), "Al", 9, "R&D", dec!(0.005)).unwrap(),
        ];
        let report = EmployeeReport::new(&employees);

        assert_eq!(report.headers(), vec!["ID", "Name", "Age", "Department", "Salary"]);
        assert_eq!(
            report.rows(),
            vec![
                vec!["102", "Bob", "41", "Finance", "65500.50"],
                vec!["7", "Al", "9", "R&D", "0.01"],
            ]
        );
    }
}
