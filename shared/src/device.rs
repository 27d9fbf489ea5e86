//! Coarse device classification from a User-Agent string
//!
//! Best-effort metadata recorded alongside a signature, not a security
//! control. Labels are the wire strings the server stores and displays.

use serde::{Deserialize, Serialize};

/// Device family derived from a User-Agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceKind {
    Android,
    Ios,
    Windows,
    Mac,
    #[default]
    Unknown,
}

impl DeviceKind {
    /// Classify a raw User-Agent string. Precedence matters: Android UAs
    /// also mention Linux, and iPad UAs mention Mac OS X.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("android") {
            Self::Android
        } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
            Self::Ios
        } else if ua.contains("windows") {
            Self::Windows
        } else if ua.contains("mac") {
            Self::Mac
        } else {
            Self::Unknown
        }
    }

    /// Wire label stored in the signature record.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Android => "Android设备",
            Self::Ios => "iOS设备",
            Self::Windows => "Windows设备",
            Self::Mac => "Mac设备",
            Self::Unknown => "未知设备",
        }
    }
}
