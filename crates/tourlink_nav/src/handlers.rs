// --- File: crates/tourlink_nav/src/handlers.rs ---

use axum::{extract::Query, response::Json};
use serde::{Deserialize, Serialize};
use tourlink_common::{validation_error, TourlinkError};

use crate::logic::{resolve_nav, RenderedNavLink, Role};
use crate::notifications::{indicator, sample_feed, NotificationIndicator};

/// Query parameters for the nav shell endpoints.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct NavQuery {
    /// The route the client is currently on.
    pub path: Option<String>,
}

/// The rendered shell for one role and one current path.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NavShellResponse {
    pub role: Role,
    pub links: Vec<RenderedNavLink>,
    pub notifications: NotificationIndicator,
}

fn render_shell(role: Role, query: NavQuery) -> Result<Json<NavShellResponse>, TourlinkError> {
    let current_path = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| validation_error("Missing path"))?;

    Ok(Json(NavShellResponse {
        role,
        links: resolve_nav(role, &current_path),
        notifications: indicator(sample_feed()),
    }))
}

/// `GET /nav/traveler?path=<current path>`
#[axum::debug_handler]
pub async fn traveler_nav_handler(
    Query(query): Query<NavQuery>,
) -> Result<Json<NavShellResponse>, TourlinkError> {
    render_shell(Role::Traveler, query)
}

/// `GET /nav/guide?path=<current path>`
#[axum::debug_handler]
pub async fn guide_nav_handler(
    Query(query): Query<NavQuery>,
) -> Result<Json<NavShellResponse>, TourlinkError> {
    render_shell(Role::Guide, query)
}
