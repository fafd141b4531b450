//! Finance API Handlers

use axum::extract::State;
use http::StatusCode;
use shared::error::Empty;
use shared::models::{FinancialSummary, Transaction, TransactionCreate, TransactionUpdate};

use crate::api::{ObjectId, ValidJson};
use crate::core::ServerState;
use crate::services::finance;
use crate::{ApiResponse, AppResult};

/// List transactions, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Transaction>>> {
    let transactions = finance::list(state.pool()).await?;
    Ok(ApiResponse::list(transactions))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
) -> AppResult<ApiResponse<Transaction>> {
    let transaction = finance::get(state.pool(), &id).await?;
    Ok(ApiResponse::success(transaction))
}

pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<TransactionCreate>,
) -> AppResult<(StatusCode, ApiResponse<Transaction>)> {
    let created = finance::create(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
    ValidJson(payload): ValidJson<TransactionUpdate>,
) -> AppResult<ApiResponse<Transaction>> {
    let updated = finance::update(state.pool(), &id, payload).await?;
    Ok(ApiResponse::success(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    ObjectId(id): ObjectId,
) -> AppResult<ApiResponse<Empty>> {
    finance::delete(state.pool(), &id).await?;
    Ok(ApiResponse::success(Empty {}))
}

/// Totals over completed transactions
pub async fn summary(State(state): State<ServerState>) -> AppResult<ApiResponse<FinancialSummary>> {
    let summary = finance::summary(state.pool()).await?;
    Ok(ApiResponse::success(summary))
}
