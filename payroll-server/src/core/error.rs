use shared::error::AppError;
use thiserror::Error;

use crate::auth::JwtError;

/// Startup and serving failures (request-level failures are [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT configuration error: {0}")]
    Jwt(#[from] JwtError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    App(#[from] AppError),
}

/// Result type alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
