// --- File: crates/tourlink_bookings/src/logic.rs ---
//! Request-independent booking actions.
//!
//! Each action takes its collaborators as explicit handles (store, cache
//! invalidator, resolved identity) so the handlers stay a thin extractor
//! layer and tests drive the actions directly.

use crate::error::BookingActionError;
use chrono::{DateTime, NaiveDate, Utc};
use tourlink_auth::UserIdentity;
use tourlink_common::{BoxedError, CacheInvalidator};
use tourlink_db::{
    Booking, BookingRepository, BookingStatus, NewBooking, OwnedStatusUpdate, OwnerField,
};
use tracing::{info, warn};

/// View routes invalidated after booking mutations.
pub const TRAVELER_BOOKINGS_VIEW: &str = "/traveler/bookings";
pub const TRAVELER_HOME_VIEW: &str = "/traveler/home";
pub const GUIDE_DASHBOARD_VIEW: &str = "/guide/dashboard";

/// Traveler-initiated cancellation.
///
/// One conditional update guarded by `id + traveler_id`. A zero-row match
/// (wrong owner or unknown id) still succeeds: the store cannot tell the
/// two apart, and the mismatch is surfaced in the log only.
pub async fn cancel_booking(
    store: &dyn BookingRepository,
    cache: &dyn CacheInvalidator<Error = BoxedError>,
    user: &UserIdentity,
    booking_id: &str,
) -> Result<(), BookingActionError> {
    let rows = store
        .update_status_if_owner(OwnedStatusUpdate {
            booking_id: booking_id.to_string(),
            owner: OwnerField::Traveler,
            owner_id: user.id.clone(),
            status: BookingStatus::Cancelled,
        })
        .await?;

    if rows == 0 {
        warn!(
            "Cancel matched no row: booking={} traveler={}",
            booking_id, user.id
        );
    } else {
        info!("Booking {} cancelled by traveler {}", booking_id, user.id);
    }

    invalidate_view(cache, TRAVELER_BOOKINGS_VIEW).await;
    invalidate_view(cache, TRAVELER_HOME_VIEW).await;
    Ok(())
}

/// Guide-initiated rejection.
///
/// Mirrors [`cancel_booking`] with the guide as the guarded owner and
/// `declined` as the target status. There is intentionally no guard on the
/// current status: the update matches on `id + guide_id` only, so a decline
/// can overwrite an already-cancelled booking (last write wins at the
/// store). See DESIGN.md.
pub async fn reject_booking(
    store: &dyn BookingRepository,
    cache: &dyn CacheInvalidator<Error = BoxedError>,
    user: &UserIdentity,
    booking_id: &str,
) -> Result<(), BookingActionError> {
    let rows = store
        .update_status_if_owner(OwnedStatusUpdate {
            booking_id: booking_id.to_string(),
            owner: OwnerField::Guide,
            owner_id: user.id.clone(),
            status: BookingStatus::Declined,
        })
        .await?;

    if rows == 0 {
        warn!(
            "Reject matched no row: booking={} guide={}",
            booking_id, user.id
        );
    } else {
        info!("Booking {} declined by guide {}", booking_id, user.id);
    }

    invalidate_view(cache, GUIDE_DASHBOARD_VIEW).await;
    Ok(())
}

/// Validated booking-creation request, after form parsing.
#[derive(Debug, Clone)]
pub struct CreateBookingRequest {
    pub guide_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: f64,
}

/// Traveler-initiated booking request.
///
/// The guide must have a detail profile before it can receive bookings; the
/// new booking starts `pending` and is owned by the caller.
pub async fn create_booking(
    store: &dyn BookingRepository,
    cache: &dyn CacheInvalidator<Error = BoxedError>,
    user: &UserIdentity,
    request: CreateBookingRequest,
) -> Result<Booking, BookingActionError> {
    if !store.guide_profile_exists(&request.guide_id).await? {
        warn!(
            "Booking attempt against guide {} without a detail profile",
            request.guide_id
        );
        return Err(BookingActionError::GuideProfileMissing);
    }

    let booking = store
        .create(NewBooking {
            traveler_id: user.id.clone(),
            guide_id: request.guide_id,
            start_date: request.start_date,
            end_date: request.end_date,
            total_price: request.total_price,
        })
        .await?;

    info!(
        "Booking {} created: traveler={} guide={}",
        booking.id, booking.traveler_id, booking.guide_id
    );

    invalidate_view(cache, GUIDE_DASHBOARD_VIEW).await;
    invalidate_view(cache, TRAVELER_BOOKINGS_VIEW).await;
    Ok(booking)
}

/// Parse a form-supplied timestamp: RFC 3339 first, then a bare date taken
/// as midnight UTC.
pub fn parse_form_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0)?,
        Utc,
    ))
}

/// Invalidation runs after the committed mutation, so a failure must not
/// turn an applied write into a client-visible error.
async fn invalidate_view(cache: &dyn CacheInvalidator<Error = BoxedError>, path: &str) {
    if let Err(e) = cache.invalidate(path).await {
        warn!("Failed to invalidate cached view {}: {}", path, e);
    }
}
