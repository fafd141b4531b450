//! Session storage - the last successful login persisted as JSON
//!
//! The stored identity is only a convenience for the console. The server
//! re-verifies the token on every request.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use shared::client::{AuthResponse, UserInfo};

use crate::ClientResult;

/// Persisted session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    /// Token `exp` claim (seconds since epoch), when readable
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn from_auth(auth: AuthResponse) -> Self {
        Self {
            expires_at: token_expiry(&auth.token),
            token: auth.token,
            user: auth.user,
        }
    }

    /// Expired once `exp` has passed; a token without a readable `exp` is treated as expired
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(exp) => chrono::Utc::now().timestamp() >= exp,
            None => true,
        }
    }
}

/// Read the `exp` claim without verifying the signature
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// JSON file holding at most one [`Session`]
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    /// Save the session, creating parent directories as needed
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load a still-valid session
    ///
    /// An expired or unreadable file is removed and `None` returned.
    pub fn load(&self) -> Option<Session> {
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&json) {
            Ok(session) if !session.is_expired() => Some(session),
            Ok(_) => {
                tracing::info!(path = %self.path.display(), "Stored session expired, discarding");
                self.discard();
                None
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Unreadable session file, discarding"
                );
                self.discard();
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the session file (logout)
    pub fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn discard(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove session file"
            );
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"x","exp":{exp}}}"#));
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_token_expiry() {
        assert_eq!(token_expiry(&token_with_exp(1_700_000_000)), Some(1_700_000_000));
        assert_eq!(token_expiry("not-a-token"), None);
        assert_eq!(token_expiry("a.!!!.c"), None);
    }

    #[test]
    fn test_missing_exp_counts_as_expired() {
        let session = Session {
            token: "a.b.c".into(),
            user: UserInfo {
                id: "65a1f0c2e4b0a1b2c3d4e5f6".into(),
                employee_id: "E1".into(),
                full_name: "Ada".into(),
                email: "ada@example.com".into(),
                role: Default::default(),
            },
            expires_at: None,
        };
        assert!(session.is_expired());
    }
}
