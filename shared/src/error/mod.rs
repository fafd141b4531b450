//! Unified error system for the payroll service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`] / [`ErrorKind`]: Classification of errors by domain and by cause
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: The `{success, data, count, error}` envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Employee errors
//! - 4xxx: Payroll errors
//! - 5xxx: Finance errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::DuplicatePeriod);
//! let err = AppError::validation("Please add a month").with_detail("field", "month");
//! let response = ApiResponse::<()>::error(&err);
//! assert!(!response.success);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::{ErrorCategory, ErrorKind};
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, Empty};
