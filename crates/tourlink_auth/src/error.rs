// --- File: crates/tourlink_auth/src/error.rs ---
use thiserror::Error;
use tourlink_common::{HttpStatusCode, TourlinkError};

/// Errors that can occur while resolving a session.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Error during the HTTP call to the identity provider
    #[error("Identity provider request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Unexpected response from the identity provider
    #[error("Identity provider returned an unexpected response: {0}")]
    ProviderError(String),

    /// Missing identity provider configuration
    #[error("Identity provider configuration missing: {0}")]
    ConfigError(String),
}

impl From<AuthError> for TourlinkError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::ConfigError(msg) => TourlinkError::ConfigError(msg),
            other => TourlinkError::AuthError(other.to_string()),
        }
    }
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::ConfigError(_) => 500,
            _ => 401,
        }
    }
}
