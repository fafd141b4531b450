//! Authentication and authorization
//!
//! - [`JwtService`] - token issuing and verification
//! - [`CurrentUser`] - caller decoded from the token
//! - [`require_auth`] / [`require_admin`] - route guards
//! - [`password`] - Argon2 hashing

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
pub use password::{hash_password, verify_dummy_password, verify_password};
