// --- File: crates/tourlink_bookings/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tourlink_common::{HttpStatusCode, TourlinkError};
use tourlink_db::DbError;
use tracing::error;

/// Booking endpoint error taxonomy.
///
/// All variants are terminal for the request: no retry, no partial success.
/// `InvalidRequest` and `Unauthorized` short-circuit before any store
/// interaction. An ownership mismatch is deliberately NOT here — it
/// collapses into a no-op success at the store (see DESIGN.md).
#[derive(Error, Debug)]
pub enum BookingActionError {
    /// A required request parameter is missing or malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request carries no resolvable session
    #[error("Unauthorized")]
    Unauthorized,

    /// The guide has no detail profile and cannot receive bookings
    #[error("Booking failed: the guide has not registered a detail profile yet")]
    GuideProfileMissing,

    /// The backing store reported a failure on write
    #[error("Database error: {0}")]
    Store(#[from] DbError),
}

impl From<BookingActionError> for TourlinkError {
    fn from(err: BookingActionError) -> Self {
        match err {
            BookingActionError::InvalidRequest(msg) => TourlinkError::ValidationError(msg),
            BookingActionError::Unauthorized => {
                TourlinkError::AuthError("no resolvable session".to_string())
            }
            BookingActionError::GuideProfileMissing => {
                TourlinkError::ValidationError("guide detail profile missing".to_string())
            }
            BookingActionError::Store(e) => TourlinkError::DatabaseError(e.to_string()),
        }
    }
}

impl HttpStatusCode for BookingActionError {
    fn status_code(&self) -> u16 {
        match self {
            BookingActionError::InvalidRequest(_) => 400,
            BookingActionError::Unauthorized => 401,
            BookingActionError::GuideProfileMissing => 400,
            BookingActionError::Store(_) => 500,
        }
    }
}

impl IntoResponse for BookingActionError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Store failures keep their detail in the log; the client gets a
        // generic body.
        let message = match &self {
            BookingActionError::Store(e) => {
                error!("Booking store failure: {}", e);
                "database error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_the_documented_status_codes() {
        assert_eq!(
            BookingActionError::InvalidRequest("Missing booking ID".into()).status_code(),
            400
        );
        assert_eq!(BookingActionError::Unauthorized.status_code(), 401);
        assert_eq!(BookingActionError::GuideProfileMissing.status_code(), 400);
        assert_eq!(
            BookingActionError::Store(DbError::QueryError("boom".into())).status_code(),
            500
        );
    }
}
