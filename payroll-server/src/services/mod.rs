//! Services
//!
//! - [`http`] - router assembly and middleware stack
//! - [`auth`], [`employee`], [`payroll`], [`finance`] - business rules over the
//!   repositories; each function takes the pool explicitly

pub mod auth;
pub mod employee;
pub mod finance;
pub mod http;
pub mod payroll;
