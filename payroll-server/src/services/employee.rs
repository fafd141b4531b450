//! Employee service

use shared::ErrorCode;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

use crate::auth::hash_password;
use crate::db::repository::{RepoError, employee};
use crate::utils::validation::{MAX_NAME_LEN, validate_phone, validate_required_text};
use crate::{AppError, AppResult};

/// Translate unique-index violations on the employee table
pub(crate) fn map_employee_write_error(err: RepoError) -> AppError {
    if err.is_duplicate_of("employee.email") {
        AppError::new(ErrorCode::DuplicateEmail)
    } else if err.is_duplicate_of("employee.employee_code") {
        AppError::new(ErrorCode::DuplicateEmployeeId)
    } else {
        err.into()
    }
}

/// Field rules the payload derive cannot express; shared with registration
pub(crate) fn validate_new_employee(data: &EmployeeCreate) -> AppResult<()> {
    validate_required_text(&data.full_name, "fullName", MAX_NAME_LEN)?;
    validate_phone(&data.phone_number, "phoneNumber")
}

pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Employee>> {
    Ok(employee::find_all(pool).await?)
}

pub async fn get(pool: &SqlitePool, id: &str) -> AppResult<Employee> {
    employee::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> AppResult<Employee> {
    validate_new_employee(&data)?;
    let password_hash = hash_password(&data.password)?;

    let created = employee::create(pool, &data, &password_hash)
        .await
        .map_err(map_employee_write_error)?;
    tracing::info!(id = %created.id, employee_id = %created.employee_id, "Employee created");
    Ok(created)
}

/// Merge `data` onto the stored employee
///
/// A new email owned by another employee fails with EmailInUse; keeping one's
/// own email is fine. A password is always re-hashed.
pub async fn update(pool: &SqlitePool, id: &str, data: EmployeeUpdate) -> AppResult<Employee> {
    if let Some(name) = &data.full_name {
        validate_required_text(name, "fullName", MAX_NAME_LEN)?;
    }
    if let Some(phone) = &data.phone_number {
        validate_phone(phone, "phoneNumber")?;
    }
    let password_hash = data.password.as_deref().map(hash_password).transpose()?;

    let updated = employee::update(pool, id, &data, password_hash.as_deref())
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::EmployeeNotFound),
            e if e.is_duplicate_of("employee.email") => AppError::new(ErrorCode::EmailInUse),
            e => map_employee_write_error(e),
        })?;
    tracing::info!(id = %updated.id, "Employee updated");
    Ok(updated)
}

/// Delete an employee; their payrolls go with them and transactions are detached
pub async fn delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
    if !employee::delete(pool, id).await? {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }
    tracing::info!(id = %id, "Employee deleted");
    Ok(())
}
