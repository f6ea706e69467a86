//! In-memory employee repository

use std::sync::Arc;

use async_trait::async_trait;
use hrdesk_domain::{Employee, EmployeePatch, HrdeskError, NewEmployee, RecordId, Result};

use super::store::{next_id, MemoryStore};
use crate::employees::ports::EmployeeRepository;

/// Employee repository backed by [`MemoryStore`]
#[derive(Clone)]
pub struct MemoryEmployeeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryEmployeeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.store.employees.read().await.clone())
    }

    async fn find(&self, id: RecordId) -> Result<Option<Employee>> {
        Ok(self.store.employees.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, new: NewEmployee) -> Result<Employee> {
        let mut employees = self.store.employees.write().await;
        let employee = Employee {
            id: next_id(employees.iter().map(|e| e.id)),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            role: new.role,
            department: new.department,
            join_date: new.join_date,
            status: new.status.unwrap_or_default(),
            photo_url: new.photo_url,
        };
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: RecordId, patch: EmployeePatch) -> Result<Employee> {
        let mut employees = self.store.employees.write().await;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| HrdeskError::NotFound(format!("employee {}", id)))?;
        patch.apply(employee);
        Ok(employee.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        let mut employees = self.store.employees.write().await;
        let position = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| HrdeskError::NotFound(format!("employee {}", id)))?;
        employees.remove(position);
        Ok(())
    }

    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>> {
        Ok(self
            .store
            .employees
            .read()
            .await
            .iter()
            .filter(|e| e.department == department)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Employee>> {
        let needle = query.to_lowercase();
        Ok(self
            .store
            .employees
            .read()
            .await
            .iter()
            .filter(|e| {
                e.first_name.to_lowercase().contains(&needle)
                    || e.last_name.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
                    || e.department.to_lowercase().contains(&needle)
                    || e.role.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
