//! Shared fixtures for the cache service integration tests
//!
//! Provides seeded in-memory stores plus an always-failing repository for
//! exercising the error paths deterministically.
#![allow(dead_code)] // not every test binary uses every fixture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use hrdesk_core::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, MemoryAttendanceRepository,
    MemoryEmployeeRepository, MemoryLeaveRepository, MemoryStore,
};
use hrdesk_domain::{
    AttendancePatch, AttendanceRecord, AttendanceStatus, Employee, EmployeePatch, EmployeeStatus,
    HrdeskError, LeavePatch, LeaveRequest, LeaveStatus, NewAttendanceRecord, NewEmployee,
    NewLeaveRequest, RecordId, Result,
};

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

pub fn employee(id: RecordId, first: &str, last: &str, department: &str) -> Employee {
    Employee {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "555-0100".to_string(),
        role: "Engineer".to_string(),
        department: department.to_string(),
        join_date: date(2),
        status: EmployeeStatus::Active,
        photo_url: None,
    }
}

pub fn new_employee(first: &str, last: &str, department: &str) -> NewEmployee {
    NewEmployee {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "555-0101".to_string(),
        role: "Manager".to_string(),
        department: department.to_string(),
        join_date: date(3),
        status: None,
        photo_url: None,
    }
}

pub fn attendance_record(id: RecordId, employee_id: RecordId, day: u32) -> AttendanceRecord {
    AttendanceRecord {
        id,
        employee_id,
        employee_name: format!("Employee {}", employee_id),
        department: "Engineering".to_string(),
        date: date(day),
        check_in: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
        check_out: None,
        status: AttendanceStatus::Present,
        notes: None,
    }
}

pub fn new_attendance(employee_id: RecordId, day: u32) -> NewAttendanceRecord {
    NewAttendanceRecord {
        employee_id,
        employee_name: format!("Employee {}", employee_id),
        department: "Engineering".to_string(),
        date: date(day),
        check_in: Some(NaiveTime::from_hms_opt(8, 55, 0).unwrap()),
        check_out: None,
        status: None,
        notes: None,
    }
}

pub fn leave_request(id: RecordId, status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id,
        employee_id: 2,
        employee_name: "Sarah Johnson".to_string(),
        leave_type: "vacation".to_string(),
        start_date: date(10),
        end_date: date(14),
        reason: Some("Family trip".to_string()),
        status,
        approved_by: None,
        created_at: Utc::now(),
    }
}

pub fn new_leave_request(employee_id: RecordId) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id,
        employee_name: format!("Employee {}", employee_id),
        leave_type: "personal".to_string(),
        start_date: date(20),
        end_date: date(21),
        reason: None,
        status: None,
        approved_by: None,
    }
}

/// Employee repository whose `list` succeeds a limited number of times
/// and fails afterwards. Every other operation always fails.
///
/// Used to verify that a failed reload records the error but keeps the
/// items from the last successful load.
pub struct FlakyListRepository {
    items: Vec<Employee>,
    remaining: AtomicUsize,
}

impl FlakyListRepository {
    pub fn succeeding_once(items: Vec<Employee>) -> Self {
        Self { items, remaining: AtomicUsize::new(1) }
    }
}

#[async_trait]
impl EmployeeRepository for FlakyListRepository {
    async fn list(&self) -> Result<Vec<Employee>> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if allowed {
            Ok(self.items.clone())
        } else {
            Err(failure())
        }
    }

    async fn find(&self, _id: RecordId) -> Result<Option<Employee>> {
        Err(failure())
    }

    async fn create(&self, _new: NewEmployee) -> Result<Employee> {
        Err(failure())
    }

    async fn update(&self, _id: RecordId, _patch: EmployeePatch) -> Result<Employee> {
        Err(failure())
    }

    async fn delete(&self, _id: RecordId) -> Result<()> {
        Err(failure())
    }

    async fn list_by_department(&self, _department: &str) -> Result<Vec<Employee>> {
        Err(failure())
    }

    async fn search(&self, _query: &str) -> Result<Vec<Employee>> {
        Err(failure())
    }
}

/// Repository that fails every operation with a persistence error.
///
/// Used to verify that mutator failures set the cache error and leave the
/// cached items untouched.
pub struct FailingRepository;

fn failure() -> HrdeskError {
    HrdeskError::Persistence("record store rejected the request".to_string())
}

#[async_trait]
impl EmployeeRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Employee>> {
        Err(failure())
    }

    async fn find(&self, _id: RecordId) -> Result<Option<Employee>> {
        Err(failure())
    }

    async fn create(&self, _new: NewEmployee) -> Result<Employee> {
        Err(failure())
    }

    async fn update(&self, _id: RecordId, _patch: EmployeePatch) -> Result<Employee> {
        Err(failure())
    }

    async fn delete(&self, _id: RecordId) -> Result<()> {
        Err(failure())
    }

    async fn list_by_department(&self, _department: &str) -> Result<Vec<Employee>> {
        Err(failure())
    }

    async fn search(&self, _query: &str) -> Result<Vec<Employee>> {
        Err(failure())
    }
}

#[async_trait]
impl AttendanceRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<AttendanceRecord>> {
        Err(failure())
    }

    async fn find(&self, _id: RecordId) -> Result<Option<AttendanceRecord>> {
        Err(failure())
    }

    async fn create(&self, _new: NewAttendanceRecord) -> Result<AttendanceRecord> {
        Err(failure())
    }

    async fn update(&self, _id: RecordId, _patch: AttendancePatch) -> Result<AttendanceRecord> {
        Err(failure())
    }

    async fn delete(&self, _id: RecordId) -> Result<()> {
        Err(failure())
    }

    async fn list_by_date(&self, _date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        Err(failure())
    }

    async fn list_by_employee(&self, _employee_id: RecordId) -> Result<Vec<AttendanceRecord>> {
        Err(failure())
    }
}

#[async_trait]
impl LeaveRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<LeaveRequest>> {
        Err(failure())
    }

    async fn find(&self, _id: RecordId) -> Result<Option<LeaveRequest>> {
        Err(failure())
    }

    async fn create(&self, _new: NewLeaveRequest) -> Result<LeaveRequest> {
        Err(failure())
    }

    async fn update(&self, _id: RecordId, _patch: LeavePatch) -> Result<LeaveRequest> {
        Err(failure())
    }

    async fn delete(&self, _id: RecordId) -> Result<()> {
        Err(failure())
    }

    async fn list_by_employee(&self, _employee_id: RecordId) -> Result<Vec<LeaveRequest>> {
        Err(failure())
    }

    async fn list_by_status(&self, _status: LeaveStatus) -> Result<Vec<LeaveRequest>> {
        Err(failure())
    }
}

/// Build the three memory repositories over one seeded store.
pub async fn seeded_store(
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    requests: Vec<LeaveRequest>,
) -> (
    MemoryEmployeeRepository,
    MemoryAttendanceRepository,
    MemoryLeaveRepository,
) {
    let store = Arc::new(MemoryStore::new());
    for employee in employees {
        let draft = NewEmployee {
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone: employee.phone,
            role: employee.role,
            department: employee.department,
            join_date: employee.join_date,
            status: Some(employee.status),
            photo_url: employee.photo_url,
        };
        MemoryEmployeeRepository::new(Arc::clone(&store))
            .create(draft)
            .await
            .expect("seed employee");
    }
    for record in attendance {
        let draft = NewAttendanceRecord {
            employee_id: record.employee_id,
            employee_name: record.employee_name,
            department: record.department,
            date: record.date,
            check_in: record.check_in,
            check_out: record.check_out,
            status: Some(record.status),
            notes: record.notes,
        };
        MemoryAttendanceRepository::new(Arc::clone(&store))
            .create(draft)
            .await
            .expect("seed attendance");
    }
    for request in requests {
        let draft = NewLeaveRequest {
            employee_id: request.employee_id,
            employee_name: request.employee_name,
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            status: Some(request.status),
            approved_by: request.approved_by,
        };
        MemoryLeaveRepository::new(Arc::clone(&store))
            .create(draft)
            .await
            .expect("seed leave request");
    }
    (
        MemoryEmployeeRepository::new(Arc::clone(&store)),
        MemoryAttendanceRepository::new(Arc::clone(&store)),
        MemoryLeaveRepository::new(store),
    )
}
