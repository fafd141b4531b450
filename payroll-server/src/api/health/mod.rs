//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::ApiResponse;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    database: bool,
}

async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    let database = sqlx::query("SELECT 1").execute(state.pool()).await.is_ok();
    ApiResponse::success(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
