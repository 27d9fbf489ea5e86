//! Payroll Signature Model
//!
//! The "signature" is a raster image drawn by the employee, not a
//! cryptographic signature. The server hashes it, writes it to disk and
//! stores the file path in `signature_data`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign request submitted by the client. `signature_data` is a
/// `data:image/png;base64,...` URL; the capture metadata is best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureRequest {
    /// Payroll UUID
    pub payroll_id: String,
    pub signature_data: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub device_info: String,
}

/// Stored signature row. `payroll_id` here is the server's internal numeric
/// row id, not the public UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub id: i64,
    pub payroll_id: i64,
    /// Server-side file path of the stored image
    pub signature_data: String,
    pub signature_hash: String,
    pub ip_address: String,
    pub user_agent: String,
    pub device_info: String,
    pub signed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Expanded payroll, present on signature reads
    #[serde(default)]
    pub payroll: Option<super::Payroll>,
}
