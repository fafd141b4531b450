//! Payroll API Handlers

use axum::extract::State;
use http::StatusCode;
use shared::error::Empty;
use shared::models::{Payroll, PayrollCreate, PayrollUpdate, PayrollWithEmployee};

use crate::api::{ObjectId, ValidJson};
use crate::core::ServerState;
use crate::services::payroll;
use crate::{ApiResponse, AppResult};

/// List all payrolls with the employee expanded
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<PayrollWithEmployee>>> {
    let records = payroll::list(state.pool()).await?;
    Ok(ApiResponse::list(records))
}

/// List the payrolls of one employee
pub async fn list_for_employee(
    State(state): State<ServerState>,
    ObjectId(employee_id): ObjectId,
) -> AppResult<ApiResponse<Vec<Payroll>>> {
    let records = payroll::list_for_employee(state.pool(), &employee_id).await?;
    Ok(ApiResponse::list(records))
}

/// Get one payroll, employee expanded with salary
pub async fn get_by_id(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
) -> AppResult<ApiResponse<PayrollWithEmployee>> {
    let record = payroll::get(state.pool(), &id).await?;
    Ok(ApiResponse::success(record))
}

pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<PayrollCreate>,
) -> AppResult<(StatusCode, ApiResponse<Payroll>)> {
    let created = payroll::create(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
    ValidJson(payload): ValidJson<PayrollUpdate>,
) -> AppResult<ApiResponse<Payroll>> {
    let updated = payroll::update(state.pool(), &id, payload).await?;
    Ok(ApiResponse::success(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
) -> AppResult<ApiResponse<Empty>> {
    payroll::delete(state.pool(), &id).await?;
    Ok(ApiResponse::success(Empty {}))
}
