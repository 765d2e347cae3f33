// --- File: crates/tourlink_bookings/src/handlers.rs ---

use axum::{
    extract::{Form, Query, State},
    http::HeaderMap,
    response::{Json, Redirect},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tourlink_auth::{SessionResolver, UserIdentity};
use tourlink_common::{BoxedError, CacheInvalidator};
use tourlink_config::AppConfig;
use tourlink_db::{Booking, BookingRepository};
use tracing::warn;

use crate::error::BookingActionError;
use crate::logic::{
    cancel_booking, create_booking, parse_form_date, reject_booking, CreateBookingRequest,
    GUIDE_DASHBOARD_VIEW,
};

/// Shared state for the booking handlers: explicit request-scoped handles to
/// every external collaborator, no ambient singletons.
pub struct BookingsState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn BookingRepository>,
    pub sessions: Arc<dyn SessionResolver>,
    pub cache: Arc<dyn CacheInvalidator<Error = BoxedError>>,
}

/// Query parameters for cancel/reject.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct BookingActionParams {
    /// The booking identifier.
    pub id: Option<String>,
}

/// Success acknowledgment for JSON-returning booking actions.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingActionResponse {
    pub success: bool,
}

/// Form payload for booking creation. Everything optional at the extractor
/// so missing fields become a 400 instead of an extractor rejection.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingForm {
    pub guide_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_price: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: Booking,
}

fn require_id(params: BookingActionParams) -> Result<String, BookingActionError> {
    params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| BookingActionError::InvalidRequest("Missing booking ID".to_string()))
}

async fn resolve_session(
    state: &BookingsState,
    headers: &HeaderMap,
) -> Result<UserIdentity, BookingActionError> {
    match state.sessions.resolve(headers).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(BookingActionError::Unauthorized),
        Err(e) => {
            // A provider outage is indistinguishable from a bad token for
            // the caller; only the log keeps the difference.
            warn!("Session resolution failed: {}", e);
            Err(BookingActionError::Unauthorized)
        }
    }
}

/// `POST /bookings/cancel?id=<booking id>` — traveler cancels a booking.
#[axum::debug_handler]
pub async fn cancel_booking_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
    Query(params): Query<BookingActionParams>,
) -> Result<Json<BookingActionResponse>, BookingActionError> {
    let booking_id = require_id(params)?;
    let user = resolve_session(&state, &headers).await?;

    cancel_booking(state.store.as_ref(), state.cache.as_ref(), &user, &booking_id).await?;

    Ok(Json(BookingActionResponse { success: true }))
}

/// `POST /bookings/reject?id=<booking id>` — guide declines a booking
/// request, then lands back on the dashboard. The redirect (instead of the
/// JSON body cancel returns) is deliberate: reject is submitted from a plain
/// dashboard form, not from script.
#[axum::debug_handler]
pub async fn reject_booking_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
    Query(params): Query<BookingActionParams>,
) -> Result<Redirect, BookingActionError> {
    let booking_id = require_id(params)?;
    let user = resolve_session(&state, &headers).await?;

    reject_booking(state.store.as_ref(), state.cache.as_ref(), &user, &booking_id).await?;

    Ok(Redirect::to(GUIDE_DASHBOARD_VIEW))
}

/// `POST /bookings/create` — traveler requests a booking with a guide.
#[axum::debug_handler]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
    Form(form): Form<CreateBookingForm>,
) -> Result<Json<CreateBookingResponse>, BookingActionError> {
    let request = validate_create_form(form)?;
    let user = resolve_session(&state, &headers).await?;

    let booking =
        create_booking(state.store.as_ref(), state.cache.as_ref(), &user, request).await?;

    Ok(Json(CreateBookingResponse {
        success: true,
        booking,
    }))
}

fn validate_create_form(form: CreateBookingForm) -> Result<CreateBookingRequest, BookingActionError> {
    let missing = |field: &str| {
        BookingActionError::InvalidRequest(format!("Missing required field: {field}"))
    };

    let guide_id = form
        .guide_id
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing("guide_id"))?;
    let start_raw = form
        .start_date
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing("start_date"))?;
    let end_raw = form
        .end_date
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing("end_date"))?;
    let price_raw = form
        .total_price
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing("total_price"))?;

    let start_date = parse_form_date(&start_raw).ok_or_else(|| {
        BookingActionError::InvalidRequest(format!("Invalid start_date: {start_raw}"))
    })?;
    let end_date = parse_form_date(&end_raw).ok_or_else(|| {
        BookingActionError::InvalidRequest(format!("Invalid end_date: {end_raw}"))
    })?;
    let total_price: f64 = price_raw.parse().map_err(|_| {
        BookingActionError::InvalidRequest(format!("Invalid total_price: {price_raw}"))
    })?;

    Ok(CreateBookingRequest {
        guide_id,
        start_date,
        end_date,
        total_price,
    })
}
