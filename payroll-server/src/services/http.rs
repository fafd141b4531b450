//! HTTP service: router assembly and tower middleware stack

use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use http::{HeaderValue, StatusCode};
use shared::ErrorCode;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::AppError;
use crate::auth::require_auth;
use crate::core::{Config, ServerState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::employees::router())
        .merge(crate::api::payroll::router())
        .merge(crate::api::finance::router())
}

/// Full application: routes, JWT guard, CORS, compression, timeout, access log
pub fn build_router(state: ServerState) -> Router {
    let cors = cors_layer(&state.config);
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    let app = build_app()
        // require_auth skips public routes itself
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    with_timeout(app, timeout)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// Abort slow requests with a 408 carrying the error envelope
fn with_timeout(app: Router, timeout: Duration) -> Router {
    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        timeout,
    ))
    .layer(middleware::map_response(timeout_envelope))
}

async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::new(ErrorCode::RequestTimeout).into_response();
    }
    response
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origin == "*" {
        return CorsLayer::permissive();
    }
    match HeaderValue::from_str(&config.cors_origin) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(
                origin = %config.cors_origin,
                "Invalid CORS_ORIGIN, cross-origin requests disabled"
            );
            CorsLayer::new()
        }
    }
}

/// HTTP request log middleware
///
/// Logs request id, method, matched path, status and latency. The level follows
/// the status class.
async fn log_request(req: Request, next: middleware::Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let mut response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "Request rejected"
        );
    } else {
        tracing::info!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
