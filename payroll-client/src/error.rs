//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
///
/// Server failures keep the decoded envelope as an [`AppError`], so callers
/// can match on [`ErrorCode`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401: missing, invalid or expired credential
    #[error("Authentication required: {0}")]
    Unauthorized(AppError),

    /// 403
    #[error("Permission denied: {0}")]
    Forbidden(AppError),

    /// 404
    #[error("Not found: {0}")]
    NotFound(AppError),

    /// 400: validation, duplicates, malformed ids
    #[error("Rejected: {0}")]
    Validation(AppError),

    /// 5xx
    #[error("Server error: {0}")]
    Internal(AppError),

    /// Session file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server error code, when the failure came from the server
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Unauthorized(e)
            | ClientError::Forbidden(e)
            | ClientError::NotFound(e)
            | ClientError::Validation(e)
            | ClientError::Internal(e) => Some(e.code),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
