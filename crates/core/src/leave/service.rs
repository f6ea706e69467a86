//! Leave request cache service

use std::sync::Arc;

use hrdesk_domain::{
    LeavePatch, LeaveRequest, LeaveStatus, NewLeaveRequest, RecordId, Result,
};
use tokio::sync::{Mutex, RwLock};
use tracing::warn;

use super::ports::LeaveRepository;

#[derive(Debug, Default)]
struct CacheState {
    items: Vec<LeaveRequest>,
    loading: bool,
    error: Option<String>,
}

/// Cached view over the leave request collection
pub struct LeaveService {
    repository: Arc<dyn LeaveRepository>,
    state: RwLock<CacheState>,
    mutation: Mutex<()>,
}

impl LeaveService {
    pub fn new(repository: Arc<dyn LeaveRepository>) -> Self {
        Self { repository, state: RwLock::new(CacheState::default()), mutation: Mutex::new(()) }
    }

    /// Replace the cache with a fresh fetch of the full collection.
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
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Snapshot of the cached requests.
    pub async fn requests(&self) -> Vec<LeaveRequest> {
        self.state.read().await.items.clone()
    }

    /// Cached requests still awaiting a decision.
    pub async fn pending_requests(&self) -> Vec<LeaveRequest> {
        self.state
            .read()
            .await
            .items
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .cloned()
            .collect()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// File a new request and append it to the cache.
    pub async fn create(&self, new: NewLeaveRequest) -> Result<LeaveRequest> {
        let _guard = self.mutation.lock().await;
        match self.repository.create(new).await {
            Ok(request) => {
                self.state.write().await.items.push(request.clone());
                Ok(request)
            }
            Err(err) => {
                warn!(error = %err, "failed to create leave request");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Partially update a request, replacing the cached element in place.
    pub async fn update(&self, id: RecordId, patch: LeavePatch) -> Result<LeaveRequest> {
        let _guard = self.mutation.lock().await;
        match self.repository.update(id, patch).await {
            Ok(request) => {
                self.replace(request.clone()).await;
                Ok(request)
            }
            Err(err) => {
                warn!(id, error = %err, "failed to update leave request");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Approve a pending request, stamping the approver.
    pub async fn approve(&self, id: RecordId, approver: &str) -> Result<LeaveRequest> {
        let _guard = self.mutation.lock().await;
        match self.repository.approve(id, approver).await {
            Ok(request) => {
                self.replace(request.clone()).await;
                Ok(request)
            }
            Err(err) => {
                warn!(id, error = %err, "failed to approve leave request");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Symmetric to [`LeaveService::approve`] with the rejected status.
    pub async fn reject(&self, id: RecordId, approver: &str) -> Result<LeaveRequest> {
        let _guard = self.mutation.lock().await;
        match self.repository.reject(id, approver).await {
            Ok(request) => {
                self.replace(request.clone()).await;
                Ok(request)
            }
            Err(err) => {
                warn!(id, error = %err, "failed to reject leave request");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Delete a request and drop it from the cache.
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        let _guard = self.mutation.lock().await;
        match self.repository.delete(id).await {
            Ok(()) => {
                self.state.write().await.items.retain(|r| r.id != id);
                Ok(())
            }
            Err(err) => {
                warn!(id, error = %err, "failed to delete leave request");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    async fn replace(&self, request: LeaveRequest) {
        let mut state = self.state.write().await;
        if let Some(slot) = state.items.iter_mut().find(|r| r.id == request.id) {
            *slot = request;
        }
    }

    async fn record_error(&self, err: &hrdesk_domain::HrdeskError) {
        self.state.write().await.error = Some(err.to_string());
    }
}
