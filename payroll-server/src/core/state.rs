use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;

/// Shared application state
///
/// Cloned into every handler; all fields are cheap handles.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config: Arc::new(config),
            pool: db.pool,
            jwt_service,
        }
    }

    /// Open the database named by the configuration and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = if config.database_path == ":memory:" {
            DbService::in_memory().await?
        } else {
            DbService::new(&config.database_path).await?
        };
        Ok(Self::new(config.clone(), db))
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
