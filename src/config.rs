use crate::error::{BadEnvVarSnafu, RollbookResult};
use dotenvy::var;
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RollbookResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_ip: var("ROLLBOOK_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        })
    }

    /// Configuration pointing at an arbitrary database, bypassing the
    /// environment. The test suites use this with an in-memory database.
    #[must_use]
    pub fn with_db_path(path: impl Into<String>) -> Self {
        Self {
            db_config: Arc::new(DbConfig::from_path(path)),
            server_ip: "127.0.0.1:0".to_string(),
        }
    }

    #[must_use]
    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    #[must_use]
    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: String,
}

impl DbConfig {
    pub fn new() -> RollbookResult<Self> {
        let path = var("DB_PATH").context(BadEnvVarSnafu { name: "DB_PATH" })?;
        Ok(Self { path })
    }

    #[must_use]
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn get_db_path(&self) -> String {
        self.path.clone()
    }
}
