//! Finance API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Finance router, admin only
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/finance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/transactions",
            get(handler::list).post(handler::create),
        )
        .route(
            "/transactions/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/summary", get(handler::summary))
        .route_layer(middleware::from_fn(require_admin))
}
