//! Employee API Handlers

use axum::extract::State;
use http::StatusCode;
use shared::error::Empty;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::{ObjectId, ValidJson};
use crate::core::ServerState;
use crate::services::employee;
use crate::{ApiResponse, AppResult};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Employee>>> {
    let employees = employee::list(state.pool()).await?;
    Ok(ApiResponse::list(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
) -> AppResult<ApiResponse<Employee>> {
    let found = employee::get(state.pool(), &id).await?;
    Ok(ApiResponse::success(found))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<EmployeeCreate>,
) -> AppResult<(StatusCode, ApiResponse<Employee>)> {
    let created = employee::create(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
    ValidJson(payload): ValidJson<EmployeeUpdate>,
) -> AppResult<ApiResponse<Employee>> {
    let updated = employee::update(state.pool(), &id, payload).await?;
    Ok(ApiResponse::success(updated))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
) -> AppResult<ApiResponse<Empty>> {
    employee::delete(state.pool(), &id).await?;
    Ok(ApiResponse::success(Empty {}))
}
