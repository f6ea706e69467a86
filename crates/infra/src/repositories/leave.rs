//! Remote leave request repository backed by the record store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use hrdesk_core::LeaveRepository;
use hrdesk_domain::{
    HrdeskError, LeavePatch, LeaveRequest, LeaveStatus, NewLeaveRequest, RecordId, Result,
};
use serde::Serialize;
use tracing::error;

use crate::store::{QueryParams, StoreClient, UpdateRecord};

const COLLECTION: &str = "leave_request";

const FIELDS: &[&str] = &[
    "employee_id",
    "employee_name",
    "type",
    "start_date",
    "end_date",
    "reason",
    "status",
    "approved_by",
    "created_at",
];

/// Record body sent to the create endpoint. The pending default and the
/// `created_at` stamp are applied here, before the record leaves the process.
#[derive(Debug, Serialize)]
struct LeaveRequestBody {
    employee_id: RecordId,
    employee_name: String,
    #[serde(rename = "type")]
    leave_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    approved_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<NewLeaveRequest> for LeaveRequestBody {
    fn from(new: NewLeaveRequest) -> Self {
        Self {
            employee_id: new.employee_id,
            employee_name: new.employee_name,
            leave_type: new.leave_type,
            start_date: new.start_date,
            end_date: new.end_date,
            reason: new.reason,
            status: new.status.unwrap_or_default(),
            approved_by: new.approved_by,
            created_at: Utc::now(),
        }
    }
}

pub struct ApiLeaveRepository {
    store: Arc<StoreClient>,
}

impl ApiLeaveRepository {
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }

    async fn fetch(&self, operation: &str, params: QueryParams) -> Result<Vec<LeaveRequest>> {
        match self.store.query(COLLECTION, &params).await {
            Ok(requests) => Ok(requests),
            Err(err) => {
                error!(error = %err, operation, "leave read failed, returning empty result");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl LeaveRepository for ApiLeaveRepository {
    async fn list(&self) -> Result<Vec<LeaveRequest>> {
        self.fetch("list", QueryParams::select(FIELDS)).await
    }

    async fn find(&self, id: RecordId) -> Result<Option<LeaveRequest>> {
        match self.store.get_by_id(COLLECTION, id, &QueryParams::select(FIELDS)).await {
            Ok(request) => Ok(request),
            Err(err) => {
                error!(error = %err, id, "leave lookup failed, reporting absent");
                Ok(None)
            }
        }
    }

    async fn create(&self, new: NewLeaveRequest) -> Result<LeaveRequest> {
        let records = [LeaveRequestBody::from(new)];
        let mut created: Vec<LeaveRequest> =
            self.store.create_records(COLLECTION, &records).await?;
        created
            .pop()
            .ok_or_else(|| HrdeskError::Persistence("create returned no leave request".to_string()))
    }

    async fn update(&self, id: RecordId, patch: LeavePatch) -> Result<LeaveRequest> {
        let updates = [UpdateRecord { id, patch }];
        let mut updated: Vec<LeaveRequest> =
            self.store.update_records(COLLECTION, &updates).await?;
        updated
            .pop()
            .ok_or_else(|| HrdeskError::NotFound(format!("leave request {} not found", id)))
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_records(COLLECTION, &[id]).await?;
        Ok(())
    }

    async fn list_by_employee(&self, employee_id: RecordId) -> Result<Vec<LeaveRequest>> {
        let params = QueryParams::select(FIELDS).matching("employee_id", employee_id.to_string());
        self.fetch("list_by_employee", params).await
    }

    async fn list_by_status(&self, status: LeaveStatus) -> Result<Vec<LeaveRequest>> {
        let params = QueryParams::select(FIELDS).matching("status", status.as_str());
        self.fetch("list_by_status", params).await
    }
}
