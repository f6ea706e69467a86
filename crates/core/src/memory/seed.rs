//! Deterministic demo dataset for the in-memory backend
//!
//! Seeds a small, fixed roster through the normal repository path so ids
//! come out of the same max+1 rule as everything else. Intended for demos
//! and for tests that want a populated store without hand-building records.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use hrdesk_domain::{
    AttendanceStatus, NewAttendanceRecord, NewEmployee, NewLeaveRequest, Result,
};

use super::{MemoryAttendanceRepository, MemoryEmployeeRepository, MemoryLeaveRepository, MemoryStore};
use crate::attendance::ports::AttendanceRepository;
use crate::employees::ports::EmployeeRepository;
use crate::leave::ports::LeaveRepository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn roster() -> Vec<NewEmployee> {
    let entry = |first: &str, last: &str, role: &str, department: &str, joined: NaiveDate| {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: "555-0100".to_string(),
            role: role.to_string(),
            department: department.to_string(),
            join_date: joined,
            status: None,
            photo_url: None,
        }
    };
    vec![
        entry("John", "Smith", "Engineer", "Engineering", date(2022, 3, 14)),
        entry("Sarah", "Johnson", "Product Manager", "Product", date(2021, 8, 2)),
        entry("Michael", "Chen", "Engineer", "Engineering", date(2023, 1, 9)),
        entry("Emily", "Davis", "Designer", "Marketing", date(2023, 6, 19)),
    ]
}

/// Populate `store` with the demo roster, one day of attendance and a few
/// leave requests. Ids are assigned sequentially from the current store
/// contents; on an empty store employees come out as 1..=4.
pub async fn demo(store: &Arc<MemoryStore>) -> Result<()> {
    let employees = MemoryEmployeeRepository::new(Arc::clone(store));
    let attendance = MemoryAttendanceRepository::new(Arc::clone(store));
    let leave = MemoryLeaveRepository::new(Arc::clone(store));

    let mut seeded = Vec::new();
    for draft in roster() {
        seeded.push(employees.create(draft).await?);
    }

    let today = date(2024, 3, 11);
    let statuses = [
        (AttendanceStatus::Present, time(9, 0)),
        (AttendanceStatus::Late, time(9, 40)),
        (AttendanceStatus::Present, time(8, 55)),
        (AttendanceStatus::Leave, None),
    ];
    for (employee, (status, check_in)) in seeded.iter().zip(statuses) {
        attendance
            .create(NewAttendanceRecord {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                department: employee.department.clone(),
                date: today,
                check_in,
                check_out: None,
                status: Some(status),
                notes: None,
            })
            .await?;
    }

    if let Some(employee) = seeded.last() {
        leave
            .create(NewLeaveRequest {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                leave_type: "vacation".to_string(),
                start_date: today,
                end_date: date(2024, 3, 15),
                reason: Some("Spring break".to_string()),
                status: None,
                approved_by: None,
            })
            .await?;
    }
    if let Some(employee) = seeded.first() {
        leave
            .create(NewLeaveRequest {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                leave_type: "sick".to_string(),
                start_date: date(2024, 3, 18),
                end_date: date(2024, 3, 19),
                reason: None,
                status: None,
                approved_by: None,
            })
            .await?;
    }

    Ok(())
}
