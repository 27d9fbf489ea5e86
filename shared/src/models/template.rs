//! Payroll Template Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payroll slip template. `fields` is a JSON document the server stores as
/// text and passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create template payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update template payload (full replacement, like the server handler)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateUpdate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: String,
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
