//! Payroll Client - typed access to the payroll API for the admin console
//!
//! - [`HttpClient`] - one method per route, shared DTOs in and out
//! - [`SessionStore`] - last login kept on disk until its token expires
//!
//! ```no_run
//! use payroll_client::{ClientConfig, HttpClient, Session, SessionStore};
//!
//! # async fn run() -> payroll_client::ClientResult<()> {
//! let store = SessionStore::new("./.payroll", "session.json");
//! let mut client = HttpClient::new(ClientConfig::from_env())?;
//!
//! match store.load() {
//!     Some(session) => client.set_token(Some(session.token)),
//!     None => {
//!         let auth = client.login("admin@example.com", "secret123").await?;
//!         store.save(&Session::from_auth(auth))?;
//!     }
//! }
//!
//! let summary = client.financial_summary().await?;
//! println!("balance: {}", summary.balance);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, SessionStore, token_expiry};

// Re-export shared DTOs used in method signatures
pub use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
pub use shared::{ApiResponse, AppError, ErrorCode};
