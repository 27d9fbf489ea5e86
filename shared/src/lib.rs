//! Shared types for the Payslip suite
//!
//! Wire DTOs and pure domain computation used by the client crate and any
//! other consumer of the payroll admin API: response envelope, data models,
//! the payroll calculation helper and device classification.

pub mod auth;
pub mod device;
pub mod models;
pub mod payroll;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use auth::{LoginRequest, LoginResponse, TokenVerification};
pub use device::DeviceKind;
pub use payroll::{Allowances, Deductions, PayrollData, PayrollTotals, ValidationReport};
pub use response::ApiResponse;
