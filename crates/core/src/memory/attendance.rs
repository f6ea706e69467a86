//! In-memory attendance repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use hrdesk_domain::{
    AttendancePatch, AttendanceRecord, HrdeskError, NewAttendanceRecord, RecordId, Result,
};

use super::store::{next_id, MemoryStore};
use crate::attendance::ports::AttendanceRepository;

/// Attendance repository backed by [`MemoryStore`]
#[derive(Clone)]
pub struct MemoryAttendanceRepository {
    store: Arc<MemoryStore>,
}

impl MemoryAttendanceRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AttendanceRepository for MemoryAttendanceRepository {
    async fn list(&self) -> Result<Vec<AttendanceRecord>> {
        Ok(self.store.attendance.read().await.clone())
    }

    async fn find(&self, id: RecordId) -> Result<Option<AttendanceRecord>> {
        Ok(self.store.attendance.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, new: NewAttendanceRecord) -> Result<AttendanceRecord> {
        let mut records = self.store.attendance.write().await;
        let record = AttendanceRecord {
            id: next_id(records.iter().map(|r| r.id)),
            employee_id: new.employee_id,
            employee_name: new.employee_name,
            department: new.department,
            date: new.date,
            check_in: new.check_in,
            check_out: new.check_out,
            status: new.status.unwrap_or_default(),
            notes: new.notes,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: RecordId, patch: AttendancePatch) -> Result<AttendanceRecord> {
        let mut records = self.store.attendance.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| HrdeskError::NotFound(format!("attendance record {}", id)))?;
        patch.apply(record);
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        let mut records = self.store.attendance.write().await;
        let position = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| HrdeskError::NotFound(format!("attendance record {}", id)))?;
        records.remove(position);
        Ok(())
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        Ok(self
            .store
            .attendance
            .read()
            .await
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn list_by_employee(&self, employee_id: RecordId) -> Result<Vec<AttendanceRecord>> {
        Ok(self
            .store
            .attendance
            .read()
            .await
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use hrdesk_domain::AttendanceStatus;

    use super::*;
    use crate::memory::tests_shared::{attendance_record, new_attendance};

    fn repository_with(records: Vec<AttendanceRecord>) -> MemoryAttendanceRepository {
        let store = Arc::new(MemoryStore::new());
        let seeded = store.attendance.try_write().map(|mut guard| {
            *guard = records;
        });
        assert!(seeded.is_ok());
        MemoryAttendanceRepository::new(store)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[tokio::test]
    async fn create_defaults_status_to_present() {
        let repo = repository_with(Vec::new());
        let mut draft = new_attendance(1, date(1));
        draft.status = None;

        let created = repo.create(draft).await.unwrap();
        assert_eq!(created.status, AttendanceStatus::Present);
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn date_filter_returns_matching_subset_in_order() {
        let repo = repository_with(vec![
            attendance_record(1, date(1)),
            attendance_record(2, date(2)),
            attendance_record(3, date(1)),
        ]);

        let first = repo.list_by_date(date(1)).await.unwrap();
        assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);

        // Idempotent and non-mutating.
        let second = repo.list_by_date(date(1)).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn set_status_changes_status_only() {
        let repo = repository_with(vec![attendance_record(1, date(1))]);

        let updated = repo.set_status(1, AttendanceStatus::Late).await.unwrap();

        assert_eq!(updated.status, AttendanceStatus::Late);
        assert_eq!(updated.date, date(1));
        assert_eq!(updated.employee_name, "John Smith");
    }

    #[tokio::test]
    async fn employee_filter_matches_reference_field() {
        let mut other = attendance_record(2, date(1));
        other.employee_id = 7;
        let repo = repository_with(vec![attendance_record(1, date(1)), other]);

        let records = repo.list_by_employee(7).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = repository_with(Vec::new());
        let result = repo.update(5, AttendancePatch::default()).await;
        assert!(matches!(result, Err(HrdeskError::NotFound(_))));
    }
}
