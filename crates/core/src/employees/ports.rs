//! Port interface for the employee collection
//!
//! This trait defines the boundary between the cache service and the
//! backing store. Two implementations exist: the remote record-store
//! repository in `hrdesk-infra` and the in-memory repository in
//! [`crate::memory`]. The backend is chosen once at startup; call sites
//! only ever see `Arc<dyn EmployeeRepository>`.

use async_trait::async_trait;
use hrdesk_domain::{Employee, EmployeePatch, NewEmployee, RecordId, Result};

/// Persistence and retrieval for employee records
///
/// Read operations degrade rather than raise: a backend failure surfaces
/// as an empty result (logged by the implementation). Write operations
/// always raise so callers can surface the failure.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees, in the backend's insertion order.
    async fn list(&self) -> Result<Vec<Employee>>;

    /// The employee with the given id, or `None` if absent.
    async fn find(&self, id: RecordId) -> Result<Option<Employee>>;

    /// Persist a new employee. The backend assigns the id and applies the
    /// active-status default; the persisted record is returned.
    async fn create(&self, new: NewEmployee) -> Result<Employee>;

    /// Merge only the fields present in `patch` into the stored record.
    async fn update(&self, id: RecordId, patch: EmployeePatch) -> Result<Employee>;

    /// Remove the employee with the given id.
    async fn delete(&self, id: RecordId) -> Result<()>;

    /// Employees whose department matches exactly, order preserved.
    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>>;

    /// Backend-side substring search over name, email, department and role.
    async fn search(&self, query: &str) -> Result<Vec<Employee>>;
}
