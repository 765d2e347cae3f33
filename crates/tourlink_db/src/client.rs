//! Database client for Tourlink
//!
//! Thin database-agnostic wrapper over an SQLx `Any` pool. URLs decide the
//! backend at runtime; sqlite is the default compiled driver.

use crate::error::DbError;
use sqlx::pool::PoolOptions;
use sqlx::Pool;
use std::sync::Arc;
use std::time::Duration;
use tourlink_config::{AppConfig, DatabaseConfig};
use tracing::debug;

/// Database client for Tourlink
#[derive(Debug, Clone)]
pub struct DbClient {
    /// The database connection pool
    pool: Pool<sqlx::Any>,
}

impl DbClient {
    /// Create a new database client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the database section is missing from the
    /// configuration or the connection cannot be established.
    pub async fn new(config: &Arc<AppConfig>) -> Result<Self, DbError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        Self::from_config(db_config).await
    }

    /// Create a new database client from a database configuration section.
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        Self::from_url(&db_config.url).await
    }

    /// Create a new database client from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty or invalid, or the connection
    /// fails.
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::UrlError("Database URL is empty".to_string()));
        }

        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, DbError> {
        debug!("Creating database pool");

        // Register the compiled drivers with the Any driver.
        sqlx::any::install_default_drivers();

        // SQLx does not create sqlite files' parent directories itself.
        if let Some(db_path) = db_url
            .strip_prefix("sqlite://")
            .or_else(|| db_url.strip_prefix("sqlite:"))
        {
            if !db_path.contains(":memory:") && !db_path.is_empty() {
                if let Some(dir) = std::path::Path::new(db_path).parent() {
                    if !dir.as_os_str().is_empty() && !dir.exists() {
                        std::fs::create_dir_all(dir).map_err(|e| {
                            DbError::ConnectionError(format!(
                                "failed to create database directory: {e}"
                            ))
                        })?;
                    }
                }
            }
        }

        let pool = PoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Duration::from_secs(600))
            .connect(db_url)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        Ok(pool)
    }

    /// The underlying connection pool, for query execution in repositories.
    pub fn pool(&self) -> &Pool<sqlx::Any> {
        &self.pool
    }

    /// Execute a statement that returns no rows.
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        let result = sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;
        Ok(result.rows_affected())
    }
}
