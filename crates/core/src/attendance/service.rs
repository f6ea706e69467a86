//! Attendance cache service
//!
//! Owns the client-side cache of the attendance collection and keeps it
//! consistent with the repository by reconciling from mutation responses,
//! never by re-fetching the whole collection after a write.

use std::sync::Arc;

use hrdesk_domain::{
    AttendancePatch, AttendanceRecord, AttendanceStatus, NewAttendanceRecord, RecordId, Result,
};
use tokio::sync::{Mutex, RwLock};
use tracing::warn;

use super::ports::AttendanceRepository;

#[derive(Debug, Default)]
struct CacheState {
    items: Vec<AttendanceRecord>,
    loading: bool,
    error: Option<String>,
}

/// Cached view over the attendance collection
pub struct AttendanceService {
    repository: Arc<dyn AttendanceRepository>,
    state: RwLock<CacheState>,
    // Mutators are serialized so two overlapping writes cannot interleave
    // their cache reconciliation.
    mutation: Mutex<()>,
}

impl AttendanceService {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository, state: RwLock::new(CacheState::default()), mutation: Mutex::new(()) }
    }

    /// Replace the cache with a fresh fetch of the full collection.
    ///
    /// On failure the error is recorded and the last known items are kept.
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

    /// Snapshot of the cached records.
    pub async fn records(&self) -> Vec<AttendanceRecord> {
        self.state.read().await.items.clone()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Create a record and append it to the cache.
    pub async fn create(&self, new: NewAttendanceRecord) -> Result<AttendanceRecord> {
        let _guard = self.mutation.lock().await;
        match self.repository.create(new).await {
            Ok(record) => {
                self.state.write().await.items.push(record.clone());
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "failed to create attendance record");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Partially update a record, replacing the cached element in place.
    pub async fn update(&self, id: RecordId, patch: AttendancePatch) -> Result<AttendanceRecord> {
        let _guard = self.mutation.lock().await;
        match self.repository.update(id, patch).await {
            Ok(record) => {
                self.replace(record.clone()).await;
                Ok(record)
            }
            Err(err) => {
                warn!(id, error = %err, "failed to update attendance record");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Status transition helper over [`AttendanceService::update`] semantics.
    pub async fn set_status(
        &self,
        id: RecordId,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord> {
        let _guard = self.mutation.lock().await;
        match self.repository.set_status(id, status).await {
            Ok(record) => {
                self.replace(record.clone()).await;
                Ok(record)
            }
            Err(err) => {
                warn!(id, status = %status, error = %err, "failed to set attendance status");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Delete a record and drop it from the cache.
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        let _guard = self.mutation.lock().await;
        match self.repository.delete(id).await {
            Ok(()) => {
                self.state.write().await.items.retain(|r| r.id != id);
                Ok(())
            }
            Err(err) => {
                warn!(id, error = %err, "failed to delete attendance record");
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    async fn replace(&self, record: AttendanceRecord) {
        let mut state = self.state.write().await;
        if let Some(slot) = state.items.iter_mut().find(|r| r.id == record.id) {
            *slot = record;
        }
    }

    async fn record_error(&self, err: &hrdesk_domain::HrdeskError) {
        self.state.write().await.error = Some(err.to_string());
    }
}
