//! Payroll Server - payroll administration HTTP API
//!
//! Employees, monthly payroll records and finance transactions behind JWT
//! authentication, stored in SQLite.
//!
//! # Module layout
//!
//! ```text
//! payroll-server/src/
//! ├── core/          # config, state, server lifecycle, errors
//! ├── auth/          # JWT, Argon2, route guards
//! ├── db/            # pool, migrations, repositories
//! ├── services/      # business rules and the HTTP stack
//! ├── api/           # routes and handlers
//! └── utils/         # logging, money, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerError, ServerState};
pub use services::http::build_router;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Start logging as configured
pub fn setup_logging(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
}
