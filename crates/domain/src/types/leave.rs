//! Leave request entity types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Leave request record
///
/// `created_at` is stamped by the backend at creation time and is immutable
/// afterwards: `LeavePatch` deliberately has no such field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub employee_id: RecordId,
    pub employee_name: String,
    /// Open-ended category: vacation, sick, personal, ...
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default)]
    pub approved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields supplied by the caller when creating a leave request
///
/// End-date-after-start-date validation belongs to the presentation layer;
/// the service persists what it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    pub employee_id: RecordId,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<LeaveStatus>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

/// Partial update for a leave request
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeavePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<Option<String>>,
}

impl LeavePatch {
    /// Merge the supplied fields into `request`, leaving the rest as-is.
    pub fn apply(&self, request: &mut LeaveRequest) {
        if let Some(value) = self.employee_id {
            request.employee_id = value;
        }
        if let Some(value) = &self.employee_name {
            request.employee_name = value.clone();
        }
        if let Some(value) = &self.leave_type {
            request.leave_type = value.clone();
        }
        if let Some(value) = self.start_date {
            request.start_date = value;
        }
        if let Some(value) = self.end_date {
            request.end_date = value;
        }
        if let Some(value) = &self.reason {
            request.reason = value.clone();
        }
        if let Some(value) = self.status {
            request.status = value;
        }
        if let Some(value) = &self.approved_by {
            request.approved_by = value.clone();
        }
    }

    /// Patch used by the approve/reject transition helpers.
    pub fn decision(status: LeaveStatus, approver: &str) -> Self {
        Self {
            status: Some(status),
            approved_by: Some(Some(approver.to_string())),
            ..Self::default()
        }
    }
}
