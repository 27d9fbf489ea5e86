//! Payroll Notification Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
    Wechat,
}

/// Server-defined delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

/// Notification row. A resend creates a new send attempt server-side; this
/// layer does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub payroll_id: i64,
    #[serde(rename = "type")]
    pub channel: NotificationChannel,
    pub recipient: String,
    pub status: NotificationStatus,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_msg: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payroll: Option<super::Payroll>,
}

/// Resend request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    pub notification_id: i64,
}
