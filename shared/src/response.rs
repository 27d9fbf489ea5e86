//! API response envelope
//!
//! The payroll server wraps success bodies as `{"data": ...}` with an
//! optional `"message"` summary. Error bodies are `{"error": "..."}` and are
//! handled at the HTTP boundary, not here.

use serde::{Deserialize, Serialize};

/// Success envelope returned by the payroll API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Response payload (absent on message-only responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable summary (e.g. batch publish result)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a data-only response
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
        }
    }

    /// Create a response with data and a summary message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Create a message-only response
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: Some(message.into()),
        }
    }
}
