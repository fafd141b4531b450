//! API routes
//!
//! - [`health`] - liveness
//! - [`auth`] - register, login, logout, profile
//! - [`employees`] - employee management (admin)
//! - [`payroll`] - payroll records
//! - [`finance`] - transactions and summary (admin)

pub mod extract;

pub mod auth;
pub mod employees;
pub mod finance;
pub mod health;
pub mod payroll;

pub use extract::{ObjectId, ValidJson};
