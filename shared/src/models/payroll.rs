//! Payroll Model

use super::employee::EmployeeSummary;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payroll status. Any status may be set to any other through an update.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PayrollStatus {
    #[default]
    Pending,
    Processed,
    Paid,
}

/// Payroll entity, one per employee and (month, year)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payroll {
    pub id: String,
    /// Employee reference
    #[cfg_attr(feature = "db", sqlx(rename = "employee_id"))]
    pub employee: String,
    pub month: i32,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub tax: f64,
    /// basicSalary + allowances - deductions - tax
    pub net_salary: f64,
    pub status: PayrollStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payroll with the employee reference expanded (list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollWithEmployee {
    pub id: String,
    pub employee: EmployeeSummary,
    pub month: i32,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub tax: f64,
    pub net_salary: f64,
    pub status: PayrollStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create payroll payload
///
/// A client-supplied `netSalary` is not part of this type and is dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCreate {
    pub employee: String,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: i32,
    #[validate(range(min = 1900, max = 9999, message = "Please add a valid year"))]
    pub year: i32,
    #[validate(range(min = 0.0, max = 1e12, message = "Basic salary must be between 0 and 1e12"))]
    pub basic_salary: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1e12, message = "Allowances must be between 0 and 1e12"))]
    pub allowances: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1e12, message = "Deductions must be between 0 and 1e12"))]
    pub deductions: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1e12, message = "Tax must be between 0 and 1e12"))]
    pub tax: f64,
    pub status: Option<PayrollStatus>,
}

/// Update payroll payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayrollUpdate {
    pub employee: Option<String>,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: Option<i32>,
    #[validate(range(min = 1900, max = 9999, message = "Please add a valid year"))]
    pub year: Option<i32>,
    #[validate(range(min = 0.0, max = 1e12, message = "Basic salary must be between 0 and 1e12"))]
    pub basic_salary: Option<f64>,
    #[validate(range(min = 0.0, max = 1e12, message = "Allowances must be between 0 and 1e12"))]
    pub allowances: Option<f64>,
    #[validate(range(min = 0.0, max = 1e12, message = "Deductions must be between 0 and 1e12"))]
    pub deductions: Option<f64>,
    #[validate(range(min = 0.0, max = 1e12, message = "Tax must be between 0 and 1e12"))]
    pub tax: Option<f64>,
    pub status: Option<PayrollStatus>,
}

impl PayrollUpdate {
    /// Whether the update carries any input of the net salary formula
    pub fn touches_amounts(&self) -> bool {
        self.basic_salary.is_some()
            || self.allowances.is_some()
            || self.deductions.is_some()
            || self.tax.is_some()
    }
}
