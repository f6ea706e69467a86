//! Remote attendance repository backed by the record store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use hrdesk_core::AttendanceRepository;
use hrdesk_domain::{
    AttendancePatch, AttendanceRecord, AttendanceStatus, HrdeskError, NewAttendanceRecord,
    RecordId, Result,
};
use serde::Serialize;
use tracing::error;

use crate::store::{QueryParams, StoreClient, UpdateRecord};

const COLLECTION: &str = "attendance";

const FIELDS: &[&str] = &[
    "employee_id",
    "employee_name",
    "department",
    "date",
    "check_in",
    "check_out",
    "status",
    "notes",
];

/// Record body sent to the create endpoint, defaults already applied.
#[derive(Debug, Serialize)]
struct AttendanceRecordBody {
    employee_id: RecordId,
    employee_name: String,
    department: String,
    date: NaiveDate,
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
    status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl From<NewAttendanceRecord> for AttendanceRecordBody {
    fn from(new: NewAttendanceRecord) -> Self {
        Self {
            employee_id: new.employee_id,
            employee_name: new.employee_name,
            department: new.department,
            date: new.date,
            check_in: new.check_in,
            check_out: new.check_out,
            status: new.status.unwrap_or_default(),
            notes: new.notes,
        }
    }
}

pub struct ApiAttendanceRepository {
    store: Arc<StoreClient>,
}

impl ApiAttendanceRepository {
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }

    async fn fetch(&self, operation: &str, params: QueryParams) -> Result<Vec<AttendanceRecord>> {
        match self.store.query(COLLECTION, &params).await {
            Ok(records) => Ok(records),
            Err(err) => {
                error!(error = %err, operation, "attendance read failed, returning empty result");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl AttendanceRepository for ApiAttendanceRepository {
    async fn list(&self) -> Result<Vec<AttendanceRecord>> {
        self.fetch("list", QueryParams::select(FIELDS)).await
    }

    async fn find(&self, id: RecordId) -> Result<Option<AttendanceRecord>> {
        match self.store.get_by_id(COLLECTION, id, &QueryParams::select(FIELDS)).await {
            Ok(record) => Ok(record),
            Err(err) => {
                error!(error = %err, id, "attendance lookup failed, reporting absent");
                Ok(None)
            }
        }
    }

    async fn create(&self, new: NewAttendanceRecord) -> Result<AttendanceRecord> {
        let records = [AttendanceRecordBody::from(new)];
        let mut created: Vec<AttendanceRecord> =
            self.store.create_records(COLLECTION, &records).await?;
        created
            .pop()
            .ok_or_else(|| HrdeskError::Persistence("create returned no attendance record".to_string()))
    }

    async fn update(&self, id: RecordId, patch: AttendancePatch) -> Result<AttendanceRecord> {
        let updates = [UpdateRecord { id, patch }];
        let mut updated: Vec<AttendanceRecord> =
            self.store.update_records(COLLECTION, &updates).await?;
        updated
            .pop()
            .ok_or_else(|| HrdeskError::NotFound(format!("attendance record {} not found", id)))
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_records(COLLECTION, &[id]).await?;
        Ok(())
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let params = QueryParams::select(FIELDS).matching("date", date.to_string());
        self.fetch("list_by_date", params).await
    }

    async fn list_by_employee(&self, employee_id: RecordId) -> Result<Vec<AttendanceRecord>> {
        let params = QueryParams::select(FIELDS).matching("employee_id", employee_id.to_string());
        self.fetch("list_by_employee", params).await
    }
}
