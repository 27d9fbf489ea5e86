//! Auth API DTOs
//!
//! The admin token lifecycle: set on the gateway at login, read on every
//! request, cleared at logout. The server issues a JWT; this layer treats it
//! as an opaque string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Extends the token lifetime server-side
    #[serde(default)]
    pub remember: bool,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub username: String,
}

/// Result of a token verification call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenVerification {
    pub valid: bool,
    pub username: String,
    pub user_id: i64,
}
