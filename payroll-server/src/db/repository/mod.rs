//! Repository Module
//!
//! Free async functions over a `&SqlitePool`, one module per table.
//! Uniqueness and references are enforced by the schema; constraint
//! violations surface as [`RepoError::Duplicate`] / [`RepoError::ForeignKey`].

pub mod employee;
pub mod payroll;
pub mod transaction;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violated; carries the SQLite message, e.g.
    /// `UNIQUE constraint failed: employee.email`
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Referenced row does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl RepoError {
    /// Whether this is a unique violation on the given `table.column`
    pub fn is_duplicate_of(&self, column: &str) -> bool {
        matches!(self, RepoError::Duplicate(msg) if msg.contains(column))
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepoError::ForeignKey(db_err.message().to_string());
            }
            if db_err.is_check_violation() {
                return RepoError::Validation(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Generic mapping; services translate the cases they know better first
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => {
                AppError::new(ErrorCode::AlreadyExists).with_detail("constraint", msg)
            }
            RepoError::ForeignKey(_) => AppError::new(ErrorCode::EmployeeNotFound),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
