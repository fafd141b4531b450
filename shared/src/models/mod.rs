//! Data models
//!
//! Shared between payroll-server and payroll-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are 24-character hex strings (see [`crate::util::object_id`]).
//! Timestamps are Unix milliseconds.

pub mod employee;
pub mod payroll;
pub mod transaction;

// Re-exports
pub use employee::*;
pub use payroll::*;
pub use transaction::*;
