//! In-memory backend
//!
//! A complete implementation of the three collection ports over a shared
//! [`MemoryStore`]. Functionally equivalent to the remote backend in
//! `hrdesk-infra` from the caller's point of view; selected via
//! configuration at startup. Also the natural backend for tests.

mod attendance;
mod employees;
mod leave;
pub mod seed;
mod store;

pub use attendance::MemoryAttendanceRepository;
pub use employees::MemoryEmployeeRepository;
pub use leave::MemoryLeaveRepository;
pub use store::MemoryStore;

#[cfg(test)]
pub(crate) mod tests_shared {
    //! Fixture builders shared by the memory repository tests.

    use chrono::{NaiveDate, NaiveTime, Utc};
    use hrdesk_domain::{
        AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, LeaveRequest, LeaveStatus,
        NewAttendanceRecord, NewEmployee, NewLeaveRequest, RecordId,
    };

    pub fn employee(id: RecordId) -> Employee {
        Employee {
            id,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: format!("john.smith+{}@example.com", id),
            phone: "555-0101".to_string(),
            role: "Engineer".to_string(),
            department: "Engineering".to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 4, 2).unwrap(),
            status: EmployeeStatus::Active,
            photo_url: None,
        }
    }

    pub fn new_employee(first: &str, last: &str) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: "555-0102".to_string(),
            role: "Designer".to_string(),
            department: "Marketing".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            status: None,
            photo_url: None,
        }
    }

    pub fn attendance_record(id: RecordId, date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: 1,
            employee_name: "John Smith".to_string(),
            department: "Engineering".to_string(),
            date,
            check_in: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            check_out: None,
            status: AttendanceStatus::Present,
            notes: None,
        }
    }

    pub fn new_attendance(employee_id: RecordId, date: NaiveDate) -> NewAttendanceRecord {
        NewAttendanceRecord {
            employee_id,
            employee_name: "John Smith".to_string(),
            department: "Engineering".to_string(),
            date,
            check_in: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
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
            start_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
            reason: Some("Family trip".to_string()),
            status,
            approved_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn new_leave_request(employee_id: RecordId) -> NewLeaveRequest {
        NewLeaveRequest {
            employee_id,
            employee_name: "Sarah Johnson".to_string(),
            leave_type: "sick".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            reason: None,
            status: None,
            approved_by: None,
        }
    }
}
