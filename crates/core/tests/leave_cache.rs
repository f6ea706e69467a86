//! Integration tests for the leave request cache service

mod support;

use std::sync::Arc;

use hrdesk_core::LeaveService;
use hrdesk_domain::{HrdeskError, LeaveStatus};
use support::{leave_request, new_leave_request, seeded_store, FailingRepository};

async fn service_with(requests: Vec<hrdesk_domain::LeaveRequest>) -> LeaveService {
    let (_, _, repo) = seeded_store(Vec::new(), Vec::new(), requests).await;
    let service = LeaveService::new(Arc::new(repo));
    service.load().await.expect("initial load");
    service
}

#[tokio::test]
async fn create_appends_pending_request_with_backend_id() {
    let service = service_with(Vec::new()).await;

    let created = service.create(new_leave_request(3)).await.unwrap();

    assert_eq!(created.status, LeaveStatus::Pending);
    assert!(created.approved_by.is_none());
    let requests = service.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, created.id);
}

#[tokio::test]
async fn approve_stamps_approver_and_reconciles_cache() {
    let service = service_with(vec![
        leave_request(1, LeaveStatus::Pending),
        leave_request(2, LeaveStatus::Pending),
    ])
    .await;

    let approved = service.approve(1, "Lisa Miller").await.unwrap();

    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.approved_by.as_deref(), Some("Lisa Miller"));

    let requests = service.requests().await;
    assert_eq!(requests[0].status, LeaveStatus::Approved);
    assert_eq!(requests[0].approved_by.as_deref(), Some("Lisa Miller"));
    // The other request is untouched.
    assert_eq!(requests[1].status, LeaveStatus::Pending);
}

#[tokio::test]
async fn reject_is_symmetric_with_rejected_status() {
    let service = service_with(vec![leave_request(1, LeaveStatus::Pending)]).await;

    let rejected = service.reject(1, "Lisa Miller").await.unwrap();

    assert_eq!(rejected.status, LeaveStatus::Rejected);
    assert_eq!(rejected.approved_by.as_deref(), Some("Lisa Miller"));
}

#[tokio::test]
async fn pending_requests_tracks_cache_decisions() {
    let service = service_with(vec![
        leave_request(1, LeaveStatus::Pending),
        leave_request(2, LeaveStatus::Pending),
        leave_request(3, LeaveStatus::Approved),
    ])
    .await;
    assert_eq!(service.pending_requests().await.len(), 2);

    service.approve(1, "Lisa Miller").await.unwrap();

    let pending = service.pending_requests().await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, 2);
}

#[tokio::test]
async fn delete_removes_request_from_cache() {
    let service = service_with(vec![leave_request(1, LeaveStatus::Pending)]).await;

    service.delete(1).await.unwrap();

    assert!(service.requests().await.is_empty());
}

#[tokio::test]
async fn failed_approval_sets_error_and_keeps_items() {
    let service = LeaveService::new(Arc::new(FailingRepository));

    let result = service.approve(1, "Lisa Miller").await;

    assert!(matches!(result, Err(HrdeskError::Persistence(_))));
    assert!(service.error().await.is_some());
    assert!(service.requests().await.is_empty());
}
