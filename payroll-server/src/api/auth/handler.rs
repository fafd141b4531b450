//! Authentication Handlers

use std::time::Duration;

use axum::extract::State;
use http::StatusCode;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use shared::error::Empty;

use crate::api::ValidJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::auth;
use crate::{ApiResponse, AppResult};

/// Register handler: creates the employee and returns a token
pub async fn register(
    State(state): State<ServerState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> AppResult<(StatusCode, ApiResponse<AuthResponse>)> {
    let jwt = state.get_jwt_service();
    let response = auth::register(state.pool(), &jwt, req).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(response)))
}

/// Login handler
pub async fn login(
    State(state): State<ServerState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AppResult<ApiResponse<AuthResponse>> {
    let jwt = state.get_jwt_service();
    let delay = Duration::from_millis(state.config.auth_fixed_delay_ms);
    let response = auth::login(state.pool(), &jwt, delay, req).await?;
    Ok(ApiResponse::success(response))
}

/// Logout handler
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(user: CurrentUser) -> ApiResponse<Empty> {
    tracing::info!(user_id = %user.id, "User logged out");
    ApiResponse::success(Empty {})
}

/// Profile of the caller
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<ApiResponse<UserInfo>> {
    let info = auth::me(state.pool(), &user).await?;
    Ok(ApiResponse::success(info))
}
