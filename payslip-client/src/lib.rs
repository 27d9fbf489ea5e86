//! Payslip Client - HTTP client for the payroll admin API
//!
//! Provides the typed request gateway, the per-resource operations facade
//! and the workflow manager used by the admin and employee-facing UIs.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod ip;
pub mod manager;
pub mod signature;

pub use api::PayrollApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use ip::{IpLookup, IpifyLookup, UNKNOWN_IP};
pub use manager::PayrollManager;
pub use signature::SignatureImage;

// Re-export shared types for convenience
pub use shared::models::{
    Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate, Notification, NotificationStatus,
    Payroll, PayrollCreate, PayrollFilter, PayrollStatus, PublishOutcome, SignatureRecord,
    SignatureRequest, Template, TemplateCreate, TemplateUpdate,
};
pub use shared::{
    Allowances, ApiResponse, Deductions, DeviceKind, LoginResponse, PayrollData, PayrollTotals,
    TokenVerification, ValidationReport,
};
