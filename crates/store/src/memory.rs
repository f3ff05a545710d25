//! In-memory storage backend.
//!
//! Keeps companies and employees in process memory behind `RwLock`s.
//! Intended for development and testing; the REST layer only depends on
//! the [`RosterStore`] trait, so swapping in a durable backend does not
//! touch request handling.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{BackendError, ResourceError, StoreResult};
use crate::types::{Company, CompanyUpdate, Employee, EmployeeUpdate, NewCompany, NewEmployee};
use crate::RosterStore;

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    companies: RwLock<HashMap<Uuid, Company>>,
    employees: RwLock<HashMap<Uuid, Employee>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err<T>(err: std::sync::PoisonError<T>) -> BackendError {
        BackendError::LockPoisoned(err.to_string())
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_companies(&self) -> StoreResult<Vec<Company>> {
        let companies = self.companies.read().map_err(Self::lock_err)?;
        let mut all: Vec<Company> = companies.values().cloned().collect();
        // Stable listing order; callers apply their own sorting on top.
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn get_company(&self, id: Uuid) -> StoreResult<Option<Company>> {
        let companies = self.companies.read().map_err(Self::lock_err)?;
        Ok(companies.get(&id).cloned())
    }

    async fn create_company(&self, new: NewCompany) -> StoreResult<Company> {
        let company = Company::from_new(new);
        let mut companies = self.companies.write().map_err(Self::lock_err)?;
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn update_company(&self, id: Uuid, update: CompanyUpdate) -> StoreResult<Company> {
        let mut companies = self.companies.write().map_err(Self::lock_err)?;
        let company = companies
            .get_mut(&id)
            .ok_or(ResourceError::CompanyNotFound { id })?;
        company.apply_update(update);
        Ok(company.clone())
    }

    async fn delete_company(&self, id: Uuid) -> StoreResult<()> {
        // Lock order is companies then employees, here and in
        // create_employee; the companies lock stays held across the sweep
        // so a concurrent create cannot slip an orphan in between.
        let mut companies = self.companies.write().map_err(Self::lock_err)?;
        if companies.remove(&id).is_none() {
            return Err(ResourceError::CompanyNotFound { id }.into());
        }

        // Employees never outlive their owning company.
        let mut employees = self.employees.write().map_err(Self::lock_err)?;
        employees.retain(|_, e| e.company_id != id);
        Ok(())
    }

    async fn list_employees(&self, company_id: Uuid) -> StoreResult<Vec<Employee>> {
        self.require_company(company_id).await?;
        let employees = self.employees.read().map_err(Self::lock_err)?;
        let mut owned: Vec<Employee> = employees
            .values()
            .filter(|e| e.company_id == company_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn get_employee(&self, company_id: Uuid, id: Uuid) -> StoreResult<Option<Employee>> {
        self.require_company(company_id).await?;
        let employees = self.employees.read().map_err(Self::lock_err)?;
        Ok(employees
            .get(&id)
            .filter(|e| e.company_id == company_id)
            .cloned())
    }

    async fn create_employee(&self, company_id: Uuid, new: NewEmployee) -> StoreResult<Employee> {
        // The companies lock is held across the insert (same lock order as
        // delete_company) so the owning company cannot vanish in between.
        let companies = self.companies.read().map_err(Self::lock_err)?;
        if !companies.contains_key(&company_id) {
            return Err(ResourceError::CompanyNotFound { id: company_id }.into());
        }
        let employee = Employee::from_new(company_id, new);
        let mut employees = self.employees.write().map_err(Self::lock_err)?;
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> StoreResult<Employee> {
        self.require_company(company_id).await?;
        let mut employees = self.employees.write().map_err(Self::lock_err)?;
        let employee = employees
            .get_mut(&id)
            .filter(|e| e.company_id == company_id)
            .ok_or(ResourceError::EmployeeNotFound { company_id, id })?;
        employee.apply_update(update);
        Ok(employee.clone())
    }

    async fn delete_employee(&self, company_id: Uuid, id: Uuid) -> StoreResult<()> {
        self.require_company(company_id).await?;
        let mut employees = self.employees.write().map_err(Self::lock_err)?;
        let removed = employees
            .get(&id)
            .is_some_and(|e| e.company_id == company_id);
        if !removed {
            return Err(ResourceError::EmployeeNotFound { company_id, id }.into());
        }
        employees.remove(&id);
        Ok(())
    }
}

impl MemoryStore {
    async fn require_company(&self, id: Uuid) -> StoreResult<()> {
        match self.get_company(id).await? {
            Some(_) => Ok(()),
            None => Err(ResourceError::CompanyNotFound { id }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn new_company() -> NewCompany {
        NewCompany {
            name: "IT_Solutions Ltd".to_string(),
            address: "583 Wall Dr. Gwynn Oak, MD 21207".to_string(),
            country: "USA".to_string(),
        }
    }

    fn new_employee(name: &str, age: u32) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            age,
            position: "Software developer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_company_roundtrip() {
        let store = MemoryStore::new();
        let created = store.create_company(new_company()).await.unwrap();

        let fetched = store.get_company(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let all = store.list_companies().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_company_fails() {
        let store = MemoryStore::new();
        let result = store.update_company(Uuid::new_v4(), new_company()).await;
        assert!(matches!(
            result,
            Err(StoreError::Resource(ResourceError::CompanyNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_employees_scoped_to_company() {
        let store = MemoryStore::new();
        let first = store.create_company(new_company()).await.unwrap();
        let second = store.create_company(new_company()).await.unwrap();

        let employee = store
            .create_employee(first.id, new_employee("Sam Raiden", 26))
            .await
            .unwrap();

        // Visible through the owning company only.
        assert!(store
            .get_employee(first.id, employee.id)
            .await
            .unwrap()
            .is_some());
        assert!(store
            .get_employee(second.id, employee.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_employees_for_unknown_company_fails() {
        let store = MemoryStore::new();
        let result = store.list_employees(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(StoreError::Resource(ResourceError::CompanyNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_delete_company_removes_employees() {
        let store = MemoryStore::new();
        let company = store.create_company(new_company()).await.unwrap();
        store
            .create_employee(company.id, new_employee("Jana McLeaf", 30))
            .await
            .unwrap();

        store.delete_company(company.id).await.unwrap();

        let employees = self_employees(&store).await;
        assert!(employees.is_empty());
    }

    async fn self_employees(store: &MemoryStore) -> Vec<Employee> {
        store
            .employees
            .read()
            .unwrap()
            .values()
            .cloned()
            .collect()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_create_and_delete_leaves_no_orphans() {
        use std::sync::Arc;

        for _ in 0..50 {
            let store = Arc::new(MemoryStore::new());
            let company = store.create_company(new_company()).await.unwrap();

            let create = {
                let store = Arc::clone(&store);
                let company_id = company.id;
                tokio::spawn(async move {
                    // May race the delete and lose; only the invariant
                    // below matters.
                    let _ = store
                        .create_employee(company_id, new_employee("Sam Raiden", 26))
                        .await;
                })
            };
            let delete = {
                let store = Arc::clone(&store);
                let company_id = company.id;
                tokio::spawn(async move { store.delete_company(company_id).await.unwrap() })
            };
            create.await.unwrap();
            delete.await.unwrap();

            let employees = self_employees(store.as_ref()).await;
            assert!(
                employees.is_empty(),
                "employee survived its company's cascade delete"
            );
        }
    }

    #[tokio::test]
    async fn test_list_employees_sorted_by_name() {
        let store = MemoryStore::new();
        let company = store.create_company(new_company()).await.unwrap();
        store
            .create_employee(company.id, new_employee("Kane Miller", 35))
            .await
            .unwrap();
        store
            .create_employee(company.id, new_employee("Jana McLeaf", 30))
            .await
            .unwrap();

        let employees = store.list_employees(company.id).await.unwrap();
        let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Jana McLeaf", "Kane Miller"]);
    }
}
