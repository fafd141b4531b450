//! Client configuration

use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the payroll server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// JWT token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `PAYROLL_API_URL` (default `http://localhost:5000`) and `PAYROLL_API_TOKEN`
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PAYROLL_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());
        let mut config = Self::new(base_url);
        config.token = std::env::var("PAYROLL_API_TOKEN").ok().filter(|t| !t.is_empty());
        config
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Join `path` onto the base URL with exactly one slash between them
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("http://localhost:5000/");
        assert_eq!(config.url("/api/employees"), "http://localhost:5000/api/employees");
        assert_eq!(config.url("health"), "http://localhost:5000/health");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://x").with_token("t").with_timeout(5);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
    }
}
