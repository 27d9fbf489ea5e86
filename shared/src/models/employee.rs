//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee lifecycle status. Deletes are soft: the server marks the row
/// `resigned` and keeps it for payroll history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Resigned,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Resigned => "resigned",
        }
    }
}

/// Employee record as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub employee_no: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub leave_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub employee_no: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, parsed server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

/// Update employee payload. The server replaces profile fields wholesale;
/// `employee_no` is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub employee_no: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}
