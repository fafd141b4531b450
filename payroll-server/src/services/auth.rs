//! Authentication service: registration, login and profile lookup

use std::time::Duration;

use shared::ErrorCode;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use shared::models::Employee;
use sqlx::SqlitePool;

use crate::auth::{
    CurrentUser, JwtService, hash_password, verify_dummy_password, verify_password,
};
use crate::db::repository::employee;
use crate::security_log;
use crate::services::employee::{map_employee_write_error, validate_new_employee};
use crate::{AppError, AppResult};

fn issue(jwt: &JwtService, employee: &Employee) -> AppResult<AuthResponse> {
    let token = jwt
        .generate_token(&employee.id, employee.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;
    Ok(AuthResponse {
        token,
        user: UserInfo::from(employee),
    })
}

/// Create an employee and sign them in
pub async fn register(
    pool: &SqlitePool,
    jwt: &JwtService,
    req: RegisterRequest,
) -> AppResult<AuthResponse> {
    validate_new_employee(&req)?;
    let password_hash = hash_password(&req.password)?;

    let created = employee::create(pool, &req, &password_hash)
        .await
        .map_err(map_employee_write_error)?;

    tracing::info!(
        user_id = %created.id,
        employee_id = %created.employee_id,
        "Employee registered"
    );
    issue(jwt, &created)
}

/// Verify credentials and issue a token
///
/// Unknown email and wrong password produce the same error after the same
/// fixed delay, and both run one Argon2 verification.
pub async fn login(
    pool: &SqlitePool,
    jwt: &JwtService,
    fixed_delay: Duration,
    req: LoginRequest,
) -> AppResult<AuthResponse> {
    let found = employee::find_credentials_by_email(pool, &req.email).await?;

    // Fixed delay before inspecting the result
    tokio::time::sleep(fixed_delay).await;

    let employee = match found {
        Some(creds) if verify_password(&req.password, &creds.password_hash) => creds.employee,
        Some(_) => {
            security_log!(
                "WARN",
                "login_failed",
                email = req.email.clone(),
                reason = "invalid_password"
            );
            return Err(AppError::invalid_credentials());
        }
        None => {
            verify_dummy_password(&req.password);
            security_log!(
                "WARN",
                "login_failed",
                email = req.email.clone(),
                reason = "unknown_email"
            );
            return Err(AppError::invalid_credentials());
        }
    };

    tracing::info!(
        user_id = %employee.id,
        role = %employee.role,
        "User logged in successfully"
    );
    issue(jwt, &employee)
}

/// Public profile of the authenticated caller
pub async fn me(pool: &SqlitePool, user: &CurrentUser) -> AppResult<UserInfo> {
    let employee = employee::find_by_id(pool, &user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    Ok(UserInfo::from(&employee))
}
