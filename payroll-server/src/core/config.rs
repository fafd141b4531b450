use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::ServerError;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database, logs) |
/// | DATABASE_PATH | $WORK_DIR/payroll.db | SQLite file |
/// | HTTP_PORT | 5000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | CORS_ORIGIN | http://localhost:5173 | console origin, `*` allows any |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | LOG_LEVEL | info | tracing filter |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | daily rolling log files when set |
/// | AUTH_FIXED_DELAY_MS | 300 | constant delay applied to every login |
/// | JWT_* | see [`JwtConfig::from_env`] | token settings |
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub database_path: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub cors_origin: String,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub auth_fixed_delay_ms: u64,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ServerError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("payroll.db")
                .to_string_lossy()
                .into_owned()
        });
        let jwt = JwtConfig::from_env(&environment)?;

        Ok(Self {
            work_dir,
            database_path,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON").is_ok_and(|v| v == "1" || v == "true"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            auth_fixed_delay_ms: std::env::var("AUTH_FIXED_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(300),
            jwt,
        })
    }

    /// In-memory configuration for tests: fixed secret, no login delay
    pub fn for_testing() -> Self {
        Self {
            work_dir: ".".into(),
            database_path: ":memory:".into(),
            http_port: 0,
            environment: "test".into(),
            cors_origin: "*".into(),
            request_timeout_ms: 30000,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            auth_fixed_delay_ms: 0,
            jwt: JwtConfig::with_secret("payroll-test-secret-that-is-at-least-32-bytes"),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testing_config() {
        let config = Config::for_testing();
        assert!(!config.is_production());
        assert!(!config.is_development());
        assert_eq!(config.auth_fixed_delay_ms, 0);
        assert!(config.jwt.secret.len() >= crate::auth::jwt::MIN_SECRET_LEN);
    }
}
