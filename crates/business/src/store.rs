//! In-memory employee record store.
//!
//! Records are keyed by [`EmployeeId`] in a `BTreeMap`, so iteration is
//! always ascending by id. Nothing is persisted; the store lives as long as
//! the process.

use crate::error::{BusinessError, BusinessResult};
use crate::seed::seed_employees;
use rust_decimal::Decimal;
use stafflab_core::{Employee, EmployeeId};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Employee record store
#[derive(Debug, Default, Clone)]
pub struct EmployeeStore {
    records: BTreeMap<EmployeeId, Employee>,
}

impl EmployeeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the seed roster
    pub fn seeded() -> BusinessResult<Self> {
        let mut store = Self::new();
        for employee in seed_employees()? {
            store.add(employee)?;
        }
        Ok(store)
    }

    /// Insert a validated record. A duplicate id leaves the store unchanged.
    pub fn add(&mut self, employee: Employee) -> BusinessResult<()> {
        if self.records.contains_key(&employee.id) {
            warn!(id = %employee.id, "rejected duplicate employee id");
            return Err(BusinessError::DuplicateId(employee.id));
        }

        debug!(id = %employee.id, department = %employee.department, "employee added");
        self.records.insert(employee.id, employee);
        Ok(())
    }

    /// Validate the raw field values and insert the resulting record
    pub fn create(
        &mut self,
        id: EmployeeId,
        name: &str,
        age: u32,
        department: &str,
        salary: Decimal,
    ) -> BusinessResult<&Employee> {
        if self.contains(id) {
            return Err(BusinessError::DuplicateId(id));
        }
        let employee = Employee::new(id, name, age, department, salary)?;
        self.add(employee)?;
        self.find(id)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.get(&id)
    }

    /// Like [`get`](Self::get) but reports a missing id as an error
    pub fn find(&self, id: EmployeeId) -> BusinessResult<&Employee> {
        self.get(id).ok_or(BusinessError::NotFound(id))
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.records.contains_key(&id)
    }

    /// All records, ascending by id
    pub fn list(&self) -> Vec<&Employee> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stafflab_core::CoreError;

    fn id(value: u32) -> EmployeeId {
        EmployeeId::new(value).unwrap()
    }

    fn employee(value: u32, name: &str) -> Employee {
        Employee::new(id(value), name, 30, "QA", dec!(45000.50)).unwrap()
    }

    #[test]
    fn test_add_then_get_returns_same_record() {
        let mut store = EmployeeStore::new();
        let record = employee(201, "Test");
        store.add(record.clone()).unwrap();

        assert_eq!(store.get(id(201)), Some(&record));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_id_leaves_store_unchanged() {
        let mut store = EmployeeStore::new();
        store.add(employee(201, "Original")).unwrap();

        let err = store.add(employee(201, "Impostor")).unwrap_err();
        assert_eq!(err, BusinessError::DuplicateId(id(201)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id(201)).unwrap().name, "Original");
    }

    #[test]
    fn test_list_sorted_regardless_of_insertion_order() {
        let mut store = EmployeeStore::new();
        for value in [42, 7, 1000, 3, 99] {
            store.add(employee(value, "X")).unwrap();
        }

        let ids: Vec<u32> = store.list().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![3, 7, 42, 99, 1000]);
    }

    #[test]
    fn test_get_missing() {
        let store = EmployeeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(id(1)), None);
        assert_eq!(store.find(id(1)), Err(BusinessError::NotFound(id(1))));
    }

    #[test]
    fn test_create_validates_fields() {
        let mut store = EmployeeStore::new();
        let created = store.create(id(201), "Test", 30, "QA", dec!(45000.50)).unwrap();
        assert_eq!(created.salary_display(), "45000.50");

        let err = store.create(id(202), "", 30, "QA", dec!(1)).unwrap_err();
        assert_eq!(err, BusinessError::Core(CoreError::EmptyField("Name")));

        let err = store.create(id(201), "Again", 30, "QA", dec!(1)).unwrap_err();
        assert_eq!(err, BusinessError::DuplicateId(id(201)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_seeded_store() {
        let store = EmployeeStore::seeded().unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.contains(id(101)));
        assert_eq!(store.get(id(103)).unwrap().department, "Marketing");
    }
}
