//! Utilities: logging setup, money arithmetic and input validation

pub mod logger;
pub mod money;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
