//! Payroll service
//!
//! `netSalary` is always computed here, never taken from the client.

use shared::ErrorCode;
use shared::models::{Payroll, PayrollCreate, PayrollUpdate, PayrollWithEmployee};
use sqlx::SqlitePool;

use crate::db::repository::payroll::PayrollWrite;
use crate::db::repository::{RepoError, employee, payroll};
use crate::utils::money::net_salary;
use crate::utils::validation::validate_reference;
use crate::{AppError, AppResult};

fn map_payroll_write_error(err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::DuplicatePeriod),
        RepoError::ForeignKey(_) => AppError::new(ErrorCode::EmployeeNotFound),
        RepoError::NotFound(_) => AppError::new(ErrorCode::PayrollNotFound),
        e => e.into(),
    }
}

/// Resolve a referenced employee id to its stored form
async fn ensure_employee(pool: &SqlitePool, id: &str) -> AppResult<String> {
    let id = validate_reference(id, "employee")?;
    if !employee::exists(pool, &id).await? {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }
    Ok(id)
}

pub async fn list(pool: &SqlitePool) -> AppResult<Vec<PayrollWithEmployee>> {
    Ok(payroll::find_all(pool).await?)
}

pub async fn list_for_employee(pool: &SqlitePool, employee_id: &str) -> AppResult<Vec<Payroll>> {
    Ok(payroll::find_by_employee(pool, employee_id).await?)
}

pub async fn get(pool: &SqlitePool, id: &str) -> AppResult<PayrollWithEmployee> {
    payroll::find_with_employee(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::PayrollNotFound))
}

pub async fn create(pool: &SqlitePool, data: PayrollCreate) -> AppResult<Payroll> {
    let employee = ensure_employee(pool, &data.employee).await?;

    let net = net_salary(data.basic_salary, data.allowances, data.deductions, data.tax)?;
    let write = PayrollWrite {
        net_salary: net,
        employee,
        month: data.month,
        year: data.year,
        basic_salary: data.basic_salary,
        allowances: data.allowances,
        deductions: data.deductions,
        tax: data.tax,
        status: data.status.unwrap_or_default(),
    };

    let created = payroll::create(pool, &write)
        .await
        .map_err(map_payroll_write_error)?;
    tracing::info!(
        id = %created.id,
        employee = %created.employee,
        period = %format!("{}-{:02}", created.year, created.month),
        net_salary = created.net_salary,
        "Payroll created"
    );
    Ok(created)
}

/// Merge `data` onto the stored payroll
///
/// When any amount is present the net salary is recomputed from the merged
/// amounts; otherwise the stored net salary is kept.
pub async fn update(pool: &SqlitePool, id: &str, data: PayrollUpdate) -> AppResult<Payroll> {
    let existing = payroll::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::PayrollNotFound))?;

    let employee = match &data.employee {
        Some(employee_id) => ensure_employee(pool, employee_id).await?,
        None => existing.employee.clone(),
    };

    let basic_salary = data.basic_salary.unwrap_or(existing.basic_salary);
    let allowances = data.allowances.unwrap_or(existing.allowances);
    let deductions = data.deductions.unwrap_or(existing.deductions);
    let tax = data.tax.unwrap_or(existing.tax);
    let net = if data.touches_amounts() {
        net_salary(basic_salary, allowances, deductions, tax)?
    } else {
        existing.net_salary
    };

    let write = PayrollWrite {
        employee,
        month: data.month.unwrap_or(existing.month),
        year: data.year.unwrap_or(existing.year),
        basic_salary,
        allowances,
        deductions,
        tax,
        net_salary: net,
        status: data.status.unwrap_or(existing.status),
    };

    let updated = payroll::update(pool, id, &write)
        .await
        .map_err(map_payroll_write_error)?;
    tracing::info!(id = %updated.id, net_salary = updated.net_salary, "Payroll updated");
    Ok(updated)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
    if !payroll::delete(pool, id).await? {
        return Err(AppError::new(ErrorCode::PayrollNotFound));
    }
    tracing::info!(id = %id, "Payroll deleted");
    Ok(())
}
