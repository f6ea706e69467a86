//! Attendance entity types
//!
//! One record is expected per employee per date, but that is a convention
//! of the data, not a constraint the store enforces. `employee_name` and
//! `department` are copied values; renaming an employee does not rewrite
//! existing attendance rows.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Daily attendance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub employee_id: RecordId,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    Leave,
    #[serde(rename = "checked-out")]
    CheckedOut,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Leave => "leave",
            Self::CheckedOut => "checked-out",
        }
    }

    /// Whether the employee showed up at all on this record.
    pub fn is_attended(&self) -> bool {
        matches!(self, Self::Present | Self::Late | Self::CheckedOut)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields supplied by the caller when creating an attendance record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub employee_id: RecordId,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for an attendance record
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttendancePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<Option<NaiveTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<Option<NaiveTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl AttendancePatch {
    /// Merge the supplied fields into `record`, leaving the rest as-is.
    pub fn apply(&self, record: &mut AttendanceRecord) {
        if let Some(value) = self.employee_id {
            record.employee_id = value;
        }
        if let Some(value) = &self.employee_name {
            record.employee_name = value.clone();
        }
        if let Some(value) = &self.department {
            record.department = value.clone();
        }
        if let Some(value) = self.date {
            record.date = value;
        }
        if let Some(value) = self.check_in {
            record.check_in = value;
        }
        if let Some(value) = self.check_out {
            record.check_out = value;
        }
        if let Some(value) = self.status {
            record.status = value;
        }
        if let Some(value) = &self.notes {
            record.notes = value.clone();
        }
    }

    /// Convenience patch that only changes the status field.
    pub fn status(status: AttendanceStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}
