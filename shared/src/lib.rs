//! Shared types for the payroll service
//!
//! Common types used by payroll-server and payroll-client: error codes,
//! the response envelope, entity models and request payloads.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
