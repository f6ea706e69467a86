//! Port interface for the attendance collection

use async_trait::async_trait;
use hrdesk_domain::{
    AttendancePatch, AttendanceRecord, AttendanceStatus, NewAttendanceRecord, RecordId, Result,
};
use chrono::NaiveDate;

/// Persistence and retrieval for attendance records
///
/// Same policy as the other collection ports: reads degrade to empty
/// results on backend failure, writes raise.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// All attendance records, in the backend's insertion order.
    async fn list(&self) -> Result<Vec<AttendanceRecord>>;

    /// The record with the given id, or `None` if absent.
    async fn find(&self, id: RecordId) -> Result<Option<AttendanceRecord>>;

    /// Persist a new record. The backend assigns the id and applies the
    /// present-status default.
    async fn create(&self, new: NewAttendanceRecord) -> Result<AttendanceRecord>;

    /// Merge only the fields present in `patch` into the stored record.
    async fn update(&self, id: RecordId, patch: AttendancePatch) -> Result<AttendanceRecord>;

    /// Remove the record with the given id.
    async fn delete(&self, id: RecordId) -> Result<()>;

    /// Records for one calendar date, order preserved.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>>;

    /// Records for one employee, order preserved.
    async fn list_by_employee(&self, employee_id: RecordId) -> Result<Vec<AttendanceRecord>>;

    /// Status transition helper; a plain partial update on the status field.
    async fn set_status(&self, id: RecordId, status: AttendanceStatus) -> Result<AttendanceRecord> {
        self.update(id, AttendancePatch::status(status)).await
    }
}
