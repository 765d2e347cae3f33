// --- File: crates/tourlink_common/src/error.rs ---
use thiserror::Error;

/// The base error type shared across Tourlink crates.
///
/// Feature crates define their own thiserror enums and convert into this
/// type at the boundary where a uniform representation is needed.
#[derive(Error, Debug)]
pub enum TourlinkError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during a database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during an external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// Implemented by error types so handlers can map any domain error to a
/// response status the same way.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for TourlinkError {
    fn status_code(&self) -> u16 {
        match self {
            TourlinkError::HttpError(_) => 500,
            TourlinkError::ConfigError(_) => 500,
            TourlinkError::AuthError(_) => 401,
            TourlinkError::ValidationError(_) => 400,
            TourlinkError::DatabaseError(_) => 500,
            TourlinkError::ExternalServiceError { .. } => 502,
            TourlinkError::NotFoundError(_) => 404,
            TourlinkError::InternalError(_) => 500,
        }
    }
}

/// Shorthand constructor for validation errors.
pub fn validation_error(message: impl Into<String>) -> TourlinkError {
    TourlinkError::ValidationError(message.into())
}

/// Shorthand constructor for external service errors.
pub fn external_service_error(
    service_name: impl Into<String>,
    message: impl Into<String>,
) -> TourlinkError {
    TourlinkError::ExternalServiceError {
        service_name: service_name.into(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(validation_error("missing id").status_code(), 400);
        assert_eq!(TourlinkError::AuthError("no session".into()).status_code(), 401);
        assert_eq!(
            TourlinkError::DatabaseError("update failed".into()).status_code(),
            500
        );
        assert_eq!(external_service_error("revalidate", "timeout").status_code(), 502);
    }
}
