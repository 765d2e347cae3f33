// --- File: crates/tourlink_db/src/error.rs ---
use thiserror::Error;
use tourlink_common::{HttpStatusCode, TourlinkError};

/// Errors produced by the database layer.
#[derive(Error, Debug)]
pub enum DbError {
    /// Missing or invalid database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Invalid database URL
    #[error("Invalid database URL: {0}")]
    UrlError(String),

    /// Failed to connect to the database
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// A query failed to execute
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A row did not map onto the expected entity shape
    #[error("Row mapping error: {0}")]
    MappingError(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(e) => DbError::ConfigError(e.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DbError::ConnectionError(err.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DbError::MappingError(err.to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }
}

impl From<DbError> for TourlinkError {
    fn from(err: DbError) -> Self {
        TourlinkError::DatabaseError(err.to_string())
    }
}

impl HttpStatusCode for DbError {
    fn status_code(&self) -> u16 {
        // Everything the store reports is a server-side failure from the
        // caller's point of view.
        500
    }
}
