//! Employee cache service
//!
//! Same cache discipline as the other collection services, plus a
//! server-side search that narrows what is visible. The canonical set and
//! the visible view are kept as separate state: mutators always operate on
//! the canonical set, and the view is a list of ids derived from the last
//! search. Clearing the search (empty query) reloads the full collection.

use std::sync::Arc;

use hrdesk_domain::{
    Employee, EmployeePatch, EmployeeStatus, NewEmployee, RecordId, Result,
};
use tokio::sync::{Mutex, RwLock};
use tracing::warn;

use super::ports::EmployeeRepository;

#[derive(Debug, Default)]
struct CacheState {
    items: Vec<Employee>,
    /// Ids visible under the active search; `None` when no search is active.
    visible: Option<Vec<RecordId>>,
    query: Option<String>,
    loading: bool,
    error: Option<String>,
}

/// Cached view over the employee collection
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    state: RwLock<CacheState>,
    mutation: Mutex<()>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository, state: RwLock::new(CacheState::default()), mutation: Mutex::new(()) }
    }

    /// Replace the cache with a fresh fetch and clear any active search.
    pub async fn load(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.repository.list().await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(items) => {
                state.items = items;
                state.visible = None;
                state.query = None;
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Snapshot of the canonical (unfiltered) set.
    pub async fn employees(&self) -> Vec<Employee> {
        self.state.read().await.items.clone()
    }

    /// Snapshot of the view: the search result when a search is active,
    /// otherwise the canonical set.
    pub async fn visible_employees(&self) -> Vec<Employee> {
        let state = self.state.read().await;
        match &state.visible {
            None => state.items.clone(),
            Some(ids) => ids
                .iter()
                .filter_map(|id| state.items.iter().find(|e| e.id == *id).cloned())
                .collect(),
        }
    }

    /// The query of the active search, if any.
    pub async fn active_query(&self) -> Option<String> {
        self.state.read().await.query.clone()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Run a backend-side search and make its results the visible view.
    ///
    /// Results are merged into the canonical set (replacing stale copies by
    /// id). An empty or whitespace query behaves as a full reload.
    pub async fn search(&self, query: &str) -> Result<()> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.load().await;
        }

        let _guard = self.mutation.lock().await;
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.repository.search(trimmed).await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(matches) => {
                let ids: Vec<RecordId> = matches.iter().map(|e| e.id).collect();
                for found in matches {
                    match state.items.iter_mut().find(|e| e.id == found.id) {
                        Some(slot) => *slot = found,
                        None => state.items.push(found),
                    }
                }
                state.visible = Some(ids);
                state.query = Some(trimmed.to_string());
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Create an employee; the new record is appended to the canonical set
    /// and, when a search is active, to the visible view as well.
    pub async fn create(&self, new: NewEmployee) -> Result<Employee> {
        let _guard = self.mutation.lock().await;
        match self.repository.create(new).await {
            Ok(employee) => {
                let mut state = self.state.write().await;
                state.items.push(employee.clone());
                if let Some(visible) = &mut state.visible {
                    visible.push(employee.id);
                }
                Ok(employee)
            }
            Err(err) => {
                warn!(error = %err, "failed to create employee");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Partially update an employee, replacing the cached element in place.
    pub async fn update(&self, id: RecordId, patch: EmployeePatch) -> Result<Employee> {
        let _guard = self.mutation.lock().await;
        match self.repository.update(id, patch).await {
            Ok(employee) => {
                let mut state = self.state.write().await;
                if let Some(slot) = state.items.iter_mut().find(|e| e.id == employee.id) {
                    *slot = employee.clone();
                }
                Ok(employee)
            }
            Err(err) => {
                warn!(id, error = %err, "failed to update employee");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Status toggle over [`EmployeeService::update`] semantics.
    pub async fn set_status(&self, id: RecordId, status: EmployeeStatus) -> Result<Employee> {
        self.update(id, EmployeePatch::status(status)).await
    }

    /// Delete an employee and drop it from both the canonical set and view.
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        let _guard = self.mutation.lock().await;
        match self.repository.delete(id).await {
            Ok(()) => {
                let mut state = self.state.write().await;
                state.items.retain(|e| e.id != id);
                if let Some(visible) = &mut state.visible {
                    visible.retain(|visible_id| *visible_id != id);
                }
                Ok(())
            }
            Err(err) => {
                warn!(id, error = %err, "failed to delete employee");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    async fn record_error(&self, err: &hrdesk_domain::HrdeskError) {
        self.state.write().await.error = Some(err.to_string());
    }
}
