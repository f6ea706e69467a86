//! Port interface for the leave request collection

use async_trait::async_trait;
use hrdesk_domain::{
    LeavePatch, LeaveRequest, LeaveStatus, NewLeaveRequest, RecordId, Result,
};

/// Persistence and retrieval for leave requests
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// All leave requests, in the backend's insertion order.
    async fn list(&self) -> Result<Vec<LeaveRequest>>;

    /// The request with the given id, or `None` if absent.
    async fn find(&self, id: RecordId) -> Result<Option<LeaveRequest>>;

    /// Persist a new request. The backend assigns the id, applies the
    /// pending-status default and stamps `created_at`.
    async fn create(&self, new: NewLeaveRequest) -> Result<LeaveRequest>;

    /// Merge only the fields present in `patch` into the stored record.
    async fn update(&self, id: RecordId, patch: LeavePatch) -> Result<LeaveRequest>;

    /// Remove the request with the given id.
    async fn delete(&self, id: RecordId) -> Result<()>;

    /// Requests filed by one employee, order preserved.
    async fn list_by_employee(&self, employee_id: RecordId) -> Result<Vec<LeaveRequest>>;

    /// Requests in one status, order preserved.
    async fn list_by_status(&self, status: LeaveStatus) -> Result<Vec<LeaveRequest>>;

    /// Approve the request and stamp the approver. A partial update on the
    /// status and approved_by fields; no other side effects.
    async fn approve(&self, id: RecordId, approver: &str) -> Result<LeaveRequest> {
        self.update(id, LeavePatch::decision(LeaveStatus::Approved, approver)).await
    }

    /// Symmetric to [`LeaveRepository::approve`] with the rejected status.
    async fn reject(&self, id: RecordId, approver: &str) -> Result<LeaveRequest> {
        self.update(id, LeavePatch::decision(LeaveStatus::Rejected, approver)).await
    }
}
