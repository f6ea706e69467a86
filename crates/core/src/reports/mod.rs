//! Derived statistics
//!
//! Pure functions over cached entity slices. Nothing here holds state:
//! every aggregate is re-derived from the caller's current items and a
//! date or range parameter, so the numbers can never drift from the cache
//! they were computed from.

use chrono::{Days, NaiveDate};
use hrdesk_domain::{
    AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, LeaveStatus,
};
use serde::Serialize;

/// Counts by status for one calendar date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub on_leave: usize,
}

/// Per-department attendance for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAttendance {
    pub department: String,
    pub present: usize,
    pub total: usize,
}

/// Present counts for a week compared against the preceding week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekOverWeek {
    pub current: usize,
    pub previous: usize,
    /// Percentage change from previous to current; 0 when previous is 0.
    pub change_pct: f64,
}

/// Headline numbers for the dashboard page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub total_employees: usize,
    pub present_today: usize,
    pub on_leave: usize,
    pub pending_requests: usize,
}

/// Count attendance statuses for `date`.
pub fn daily_summary(records: &[AttendanceRecord], date: NaiveDate) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for record in records.iter().filter(|r| r.date == date) {
        match record.status {
            AttendanceStatus::Present | AttendanceStatus::CheckedOut => summary.present += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::Late => summary.late += 1,
            AttendanceStatus::Leave => summary.on_leave += 1,
        }
    }
    summary
}

/// Per-department present/total counts for `date`, sorted by department
/// name so the output is deterministic regardless of record order.
pub fn department_breakdown(
    records: &[AttendanceRecord],
    date: NaiveDate,
) -> Vec<DepartmentAttendance> {
    let mut breakdown: Vec<DepartmentAttendance> = Vec::new();
    for record in records.iter().filter(|r| r.date == date) {
        let entry = match breakdown.iter_mut().find(|d| d.department == record.department) {
            Some(entry) => entry,
            None => {
                breakdown.push(DepartmentAttendance {
                    department: record.department.clone(),
                    present: 0,
                    total: 0,
                });
                // Just pushed, so the last element exists.
                match breakdown.last_mut() {
                    Some(entry) => entry,
                    None => continue,
                }
            }
        };
        entry.total += 1;
        if record.status.is_attended() {
            entry.present += 1;
        }
    }
    breakdown.sort_by(|a, b| a.department.cmp(&b.department));
    breakdown
}

/// Share of decided requests that were approved, in `[0, 1]`.
///
/// Pending requests are not decisions and do not count either way; with no
/// decided requests at all the rate is 0.
pub fn approval_rate(requests: &[LeaveRequest]) -> f64 {
    let approved = requests.iter().filter(|r| r.status == LeaveStatus::Approved).count();
    let rejected = requests.iter().filter(|r| r.status == LeaveStatus::Rejected).count();
    let decided = approved + rejected;
    if decided == 0 {
        return 0.0;
    }
    approved as f64 / decided as f64
}

/// Attended-record counts for the seven days starting at `week_start`,
/// compared with the seven days immediately before.
pub fn week_over_week(records: &[AttendanceRecord], week_start: NaiveDate) -> WeekOverWeek {
    let week_end = week_start.checked_add_days(Days::new(7));
    let previous_start = week_start.checked_sub_days(Days::new(7));

    let attended_between = |from: Option<NaiveDate>, to: Option<NaiveDate>| -> usize {
        match (from, to) {
            (Some(from), Some(to)) => records
                .iter()
                .filter(|r| r.date >= from && r.date < to && r.status.is_attended())
                .count(),
            _ => 0,
        }
    };

    let current = attended_between(Some(week_start), week_end);
    let previous = attended_between(previous_start, Some(week_start));
    let change_pct = if previous == 0 {
        0.0
    } else {
        (current as f64 - previous as f64) / previous as f64 * 100.0
    };

    WeekOverWeek { current, previous, change_pct }
}

/// Headline dashboard numbers for `today`.
///
/// "Present today" counts present and late records, matching how the
/// dashboard has always read the day at a glance.
pub fn dashboard_snapshot(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    requests: &[LeaveRequest],
    today: NaiveDate,
) -> DashboardSnapshot {
    let todays: Vec<&AttendanceRecord> = attendance.iter().filter(|r| r.date == today).collect();
    DashboardSnapshot {
        total_employees: employees.len(),
        present_today: todays
            .iter()
            .filter(|r| {
                matches!(r.status, AttendanceStatus::Present | AttendanceStatus::Late)
            })
            .count(),
        on_leave: todays.iter().filter(|r| r.status == AttendanceStatus::Leave).count(),
        pending_requests: requests.iter().filter(|r| r.status == LeaveStatus::Pending).count(),
    }
}
