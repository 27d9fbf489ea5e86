//! Payroll slip line items and derived totals
//!
//! Pure computation, no I/O. The server recomputes totals on its side; these
//! helpers exist so the admin UI can preview and validate a slip before
//! submitting it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One payroll slip's line items. Absent components default to 0 on the
/// wire, and amounts travel as JSON numbers, matching what the server
/// stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollData {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub basic_salary: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub performance: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub meal_allowance: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub transport: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub social_insurance: Decimal,
}

/// Allowance components for [`PayrollData::standard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Allowances {
    pub meal: Decimal,
    pub transport: Decimal,
}

/// Deduction components for [`PayrollData::standard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Deductions {
    pub tax: Decimal,
    pub social_insurance: Decimal,
}

/// Derived totals for one slip. `total_net` may be negative; it is not
/// clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_gross: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_deductions: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_net: Decimal,
}

/// Result of a local pre-submit check. Never raised as an error; the caller
/// decides what to do with it.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl PayrollData {
    /// Build a slip from the standard components, defaulting everything not
    /// given to 0.
    pub fn standard(
        basic_salary: Decimal,
        performance: Decimal,
        allowances: Allowances,
        deductions: Deductions,
    ) -> Self {
        Self {
            basic_salary,
            performance,
            meal_allowance: allowances.meal,
            transport: allowances.transport,
            tax: deductions.tax,
            social_insurance: deductions.social_insurance,
        }
    }

    /// Sum the fixed gross and deduction field sets.
    pub fn calculate_totals(&self) -> PayrollTotals {
        let total_gross =
            self.basic_salary + self.performance + self.meal_allowance + self.transport;
        let total_deductions = self.tax + self.social_insurance;
        PayrollTotals {
            total_gross,
            total_deductions,
            total_net: total_gross - total_deductions,
        }
    }

    /// Check required fields. Only `basic_salary` is required today, but the
    /// report shape supports more checks.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();

        if self.basic_salary <= Decimal::ZERO {
            errors.push("basic_salary 是必填项且必须大于0".to_string());
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
