//! Employee entity types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Employee record as held in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Employee {
    /// Display name, first + last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields supplied by the caller when creating an employee
///
/// The id is assigned by the backend; `status` defaults to active when not
/// provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial update for an employee
///
/// `None` means "leave the stored value untouched". For the nullable
/// `photo_url`, `Some(None)` clears the value; omission never does.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
}

impl EmployeePatch {
    /// Merge the supplied fields into `employee`, leaving the rest as-is.
    pub fn apply(&self, employee: &mut Employee) {
        if let Some(value) = &self.first_name {
            employee.first_name = value.clone();
        }
        if let Some(value) = &self.last_name {
            employee.last_name = value.clone();
        }
        if let Some(value) = &self.email {
            employee.email = value.clone();
        }
        if let Some(value) = &self.phone {
            employee.phone = value.clone();
        }
        if let Some(value) = &self.role {
            employee.role = value.clone();
        }
        if let Some(value) = &self.department {
            employee.department = value.clone();
        }
        if let Some(value) = self.join_date {
            employee.join_date = value;
        }
        if let Some(value) = self.status {
            employee.status = value;
        }
        if let Some(value) = &self.photo_url {
            employee.photo_url = value.clone();
        }
    }

    /// Convenience patch that only changes the status field.
    pub fn status(status: EmployeeStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}
