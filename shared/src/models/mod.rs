//! Data models
//!
//! Wire shapes of the payroll admin API. Owned by the server; this layer
//! holds no authoritative copy. Row ids are `i64` except payrolls, whose
//! public id is the server-issued UUID string.

pub mod employee;
pub mod notification;
pub mod payroll;
pub mod signature;
pub mod template;

// Re-exports
pub use employee::*;
pub use notification::*;
pub use payroll::*;
pub use signature::*;
pub use template::*;
