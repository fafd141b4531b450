//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are stored as `f64`; arithmetic happens in `Decimal` and the result
//! is rounded to 2 places (half away from zero) before going back to `f64`.
//! Values outside the `Decimal` range are errors, never silently zero.

use rust_decimal::prelude::*;

use crate::{AppError, AppResult};

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> Option<f64> {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}

fn amount(value: f64, field: &str) -> AppResult<Decimal> {
    to_decimal(value).ok_or_else(|| out_of_range(field))
}

fn out_of_range(field: &str) -> AppError {
    AppError::invalid_field(field, format!("{field} is out of range"))
}

/// `basic + allowances - deductions - tax`
pub fn net_salary(basic_salary: f64, allowances: f64, deductions: f64, tax: f64) -> AppResult<f64> {
    let basic_salary = amount(basic_salary, "basicSalary")?;
    let allowances = amount(allowances, "allowances")?;
    let deductions = amount(deductions, "deductions")?;
    let tax = amount(tax, "tax")?;
    basic_salary
        .checked_add(allowances)
        .and_then(|v| v.checked_sub(deductions))
        .and_then(|v| v.checked_sub(tax))
        .and_then(to_f64)
        .ok_or_else(|| out_of_range("netSalary"))
}

/// Round a stored total to 2 places
pub fn round(value: f64) -> AppResult<f64> {
    to_decimal(value)
        .and_then(to_f64)
        .ok_or_else(|| AppError::internal(format!("Amount {value} is out of range")))
}

/// `income - expenses`, rounded
pub fn difference(income: f64, expenses: f64) -> AppResult<f64> {
    to_decimal(income)
        .zip(to_decimal(expenses))
        .and_then(|(i, e)| i.checked_sub(e))
        .and_then(to_f64)
        .ok_or_else(|| AppError::internal("Balance is out of range"))
}
