// --- File: crates/tourlink_nav/src/routes.rs ---

use crate::handlers::{guide_nav_handler, traveler_nav_handler};
use axum::{routing::get, Router};
use tracing::info;

/// Creates a router for the navigation shell endpoints.
///
/// Pure rendering over the query parameters; no state to inject.
pub fn routes() -> Router {
    info!("💡 Nav: mounting /nav/{{traveler,guide}} routes.");

    Router::new()
        .route("/nav/traveler", get(traveler_nav_handler))
        .route("/nav/guide", get(guide_nav_handler))
}
