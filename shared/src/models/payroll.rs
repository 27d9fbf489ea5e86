//! Payroll Record Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payroll::PayrollData;

/// Payroll slip lifecycle. Draft slips can be edited and deleted; published
/// slips can be signed; signed slips are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    Draft,
    Published,
    Signed,
}

impl PayrollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Signed => "signed",
        }
    }
}

/// Payroll slip as returned by the server. The public `id` is a UUID; the
/// numeric row id is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payroll {
    pub id: String,
    pub employee_id: i64,
    /// Expanded employee row, present on list/detail reads
    #[serde(default)]
    pub employee: Option<super::Employee>,
    /// Pay period, e.g. "2024-08"
    pub period: String,
    pub template_id: i64,
    #[serde(default)]
    pub template: Option<super::Template>,
    /// Days actually worked in the period
    #[serde(default)]
    pub work_days: f64,
    /// Total days in the period
    #[serde(default)]
    pub month_days: f64,
    /// Whether gross items were prorated by work_days / month_days
    #[serde(default)]
    pub is_prorated: bool,
    /// Line items, stored server-side as JSON text. See [`Payroll::data`].
    pub payroll_data: String,
    /// Full-month gross, kept for reference when prorated
    #[serde(default, with = "rust_decimal::serde::float")]
    pub original_gross: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_gross: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_net: Decimal,
    pub status: PayrollStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payroll {
    /// Parse the JSON-encoded `payroll_data` column into typed line items.
    pub fn data(&self) -> Result<PayrollData, serde_json::Error> {
        serde_json::from_str(&self.payroll_data)
    }
}

/// Create/update payroll payload. Unlike the stored record, line items go
/// over the wire as a structured object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCreate {
    pub employee_id: i64,
    pub period: String,
    pub template_id: i64,
    #[serde(default)]
    pub work_days: f64,
    #[serde(default)]
    pub month_days: f64,
    #[serde(default)]
    pub is_prorated: bool,
    pub payroll_data: PayrollData,
}

/// Batch publish request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRequest {
    pub payroll_ids: Vec<String>,
    pub notify_employees: bool,
}

/// Batch publish result: the server's summary plus the ids it was asked to
/// publish.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub message: String,
    pub ids: Vec<String>,
}

/// Optional filters for listing payrolls, serialized as query parameters.
#[derive(Debug, Clone, Default)]
pub struct PayrollFilter {
    pub status: Option<PayrollStatus>,
    pub period: Option<String>,
    pub employee_id: Option<i64>,
}

impl PayrollFilter {
    /// Serialize into query pairs. An empty filter yields no pairs, so the
    /// request URL carries no `?` at all.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(period) = &self.period {
            pairs.push(("period", period.clone()));
        }
        if let Some(employee_id) = self.employee_id {
            pairs.push(("employee_id", employee_id.to_string()));
        }
        pairs
    }
}
