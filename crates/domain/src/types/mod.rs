//! Domain types and models
//!
//! One module per entity collection. Each entity comes with a `New*` draft
//! type (caller-supplied fields for `create`) and a `*Patch` type carrying
//! only the fields a partial update should touch.

pub mod attendance;
pub mod employee;
pub mod leave;

pub use attendance::{AttendancePatch, AttendanceRecord, AttendanceStatus, NewAttendanceRecord};
pub use employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee};
pub use leave::{LeavePatch, LeaveRequest, LeaveStatus, NewLeaveRequest};

/// Unique record identifier assigned by the backing store.
///
/// The remote store hands these out on create; the in-memory backend uses a
/// monotonic max+1 rule. Never reassigned once set.
pub type RecordId = i64;
