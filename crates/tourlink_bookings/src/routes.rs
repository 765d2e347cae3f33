// --- File: crates/tourlink_bookings/src/routes.rs ---

use crate::handlers::{
    cancel_booking_handler, create_booking_handler, reject_booking_handler, BookingsState,
};
use axum::{routing::post, Router};
use std::sync::Arc;
use tourlink_auth::SessionResolver;
use tourlink_common::{BoxedError, CacheInvalidator};
use tourlink_config::AppConfig;
use tourlink_db::BookingRepository;
use tracing::info;

/// Creates a router containing all booking routes.
///
/// The caller supplies the concrete store, session resolver and cache
/// invalidator; the handlers never construct collaborators themselves.
pub fn routes(
    config: Arc<AppConfig>,
    store: Arc<dyn BookingRepository>,
    sessions: Arc<dyn SessionResolver>,
    cache: Arc<dyn CacheInvalidator<Error = BoxedError>>,
) -> Router {
    info!("💡 Bookings: mounting /bookings/{{cancel,reject,create}} routes.");

    let state = Arc::new(BookingsState {
        config,
        store,
        sessions,
        cache,
    });

    Router::new()
        .route("/bookings/cancel", post(cancel_booking_handler))
        .route("/bookings/reject", post(reject_booking_handler))
        .route("/bookings/create", post(create_booking_handler))
        .with_state(state)
}
