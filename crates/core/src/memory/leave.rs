//! In-memory leave request repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use hrdesk_domain::{
    HrdeskError, LeavePatch, LeaveRequest, LeaveStatus, NewLeaveRequest, RecordId, Result,
};

use super::store::{next_id, MemoryStore};
use crate::leave::ports::LeaveRepository;

/// Leave repository backed by [`MemoryStore`]
#[derive(Clone)]
pub struct MemoryLeaveRepository {
    store: Arc<MemoryStore>,
}

impl MemoryLeaveRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LeaveRepository for MemoryLeaveRepository {
    async fn list(&self) -> Result<Vec<LeaveRequest>> {
        Ok(self.store.leave_requests.read().await.clone())
    }

    async fn find(&self, id: RecordId) -> Result<Option<LeaveRequest>> {
        Ok(self.store.leave_requests.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, new: NewLeaveRequest) -> Result<LeaveRequest> {
        let mut requests = self.store.leave_requests.write().await;
        let request = LeaveRequest {
            id: next_id(requests.iter().map(|r| r.id)),
            employee_id: new.employee_id,
            employee_name: new.employee_name,
            leave_type: new.leave_type,
            start_date: new.start_date,
            end_date: new.end_date,
            reason: new.reason,
            status: new.status.unwrap_or_default(),
            approved_by: new.approved_by,
            created_at: Utc::now(),
        };
        requests.push(request.clone());
        Ok(request)
    }

    async fn update(&self, id: RecordId, patch: LeavePatch) -> Result<LeaveRequest> {
        let mut requests = self.store.leave_requests.write().await;
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| HrdeskError::NotFound(format!("leave request {}", id)))?;
        patch.apply(request);
        Ok(request.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        let mut requests = self.store.leave_requests.write().await;
        let position = requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| HrdeskError::NotFound(format!("leave request {}", id)))?;
        requests.remove(position);
        Ok(())
    }

    async fn list_by_employee(&self, employee_id: RecordId) -> Result<Vec<LeaveRequest>> {
        Ok(self
            .store
            .leave_requests
            .read()
            .await
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: LeaveStatus) -> Result<Vec<LeaveRequest>> {
        Ok(self
            .store
            .leave_requests
            .read()
            .await
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::tests_shared::{leave_request, new_leave_request};

    fn repository_with(requests: Vec<LeaveRequest>) -> MemoryLeaveRepository {
        let store = Arc::new(MemoryStore::new());
        let seeded = store.leave_requests.try_write().map(|mut guard| {
            *guard = requests;
        });
        assert!(seeded.is_ok());
        MemoryLeaveRepository::new(store)
    }

    #[tokio::test]
    async fn create_defaults_to_pending_and_stamps_created_at() {
        let repo = repository_with(Vec::new());
        let before = Utc::now();

        let created = repo.create(new_leave_request(2)).await.unwrap();

        assert_eq!(created.status, LeaveStatus::Pending);
        assert!(created.approved_by.is_none());
        assert!(created.created_at >= before);
    }

    #[tokio::test]
    async fn approve_sets_status_and_approver() {
        let repo = repository_with(vec![leave_request(5, LeaveStatus::Pending)]);

        let approved = repo.approve(5, "Lisa Miller").await.unwrap();

        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_by.as_deref(), Some("Lisa Miller"));
    }

    #[tokio::test]
    async fn reject_is_symmetric_to_approve() {
        let repo = repository_with(vec![leave_request(5, LeaveStatus::Pending)]);

        let rejected = repo.reject(5, "Lisa Miller").await.unwrap();

        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.approved_by.as_deref(), Some("Lisa Miller"));
    }

    #[tokio::test]
    async fn approval_does_not_touch_other_fields() {
        let repo = repository_with(vec![leave_request(5, LeaveStatus::Pending)]);
        let before = repo.find(5).await.unwrap().unwrap();

        let approved = repo.approve(5, "Lisa Miller").await.unwrap();

        assert_eq!(approved.leave_type, before.leave_type);
        assert_eq!(approved.start_date, before.start_date);
        assert_eq!(approved.end_date, before.end_date);
        assert_eq!(approved.created_at, before.created_at);
    }

    #[tokio::test]
    async fn status_filter_returns_only_matching_requests() {
        let repo = repository_with(vec![
            leave_request(1, LeaveStatus::Pending),
            leave_request(2, LeaveStatus::Approved),
            leave_request(3, LeaveStatus::Pending),
        ]);

        let pending = repo.list_by_status(LeaveStatus::Pending).await.unwrap();
        assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[tokio::test]
    async fn delete_then_find_returns_none() {
        let repo = repository_with(vec![leave_request(1, LeaveStatus::Pending)]);

        repo.delete(1).await.unwrap();

        assert!(repo.find(1).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
