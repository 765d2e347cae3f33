// --- File: crates/tourlink_nav/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{NavQuery, NavShellResponse};
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/nav/traveler", // Path relative to /api
    params(NavQuery),
    responses(
        (status = 200, description = "Traveler navigation shell", body = NavShellResponse),
        (status = 400, description = "Missing path parameter")
    ),
    tag = "Navigation"
)]
fn doc_traveler_nav_handler() {}

#[utoipa::path(
    get,
    path = "/nav/guide", // Path relative to /api
    params(NavQuery),
    responses(
        (status = 200, description = "Guide navigation shell", body = NavShellResponse),
        (status = 400, description = "Missing path parameter")
    ),
    tag = "Navigation"
)]
fn doc_guide_nav_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_traveler_nav_handler, doc_guide_nav_handler),
    components(schemas(NavShellResponse)),
    tags((name = "Navigation", description = "Role-scoped navigation shell"))
)]
pub struct NavApiDoc;
