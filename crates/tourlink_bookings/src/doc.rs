// --- File: crates/tourlink_bookings/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{BookingActionParams, BookingActionResponse, CreateBookingForm};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/bookings/cancel", // Path relative to /api
    params(BookingActionParams),
    responses(
        (status = 200, description = "Booking cancelled (or no row matched; see notes)", body = BookingActionResponse),
        (status = 400, description = "Missing booking ID"),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Store failure")
    ),
    tag = "Bookings"
)]
fn doc_cancel_booking_handler() {}

#[utoipa::path(
    post,
    path = "/bookings/reject", // Path relative to /api
    params(BookingActionParams),
    responses(
        (status = 303, description = "Booking declined; redirect to the guide dashboard"),
        (status = 400, description = "Missing booking ID"),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Store failure")
    ),
    tag = "Bookings"
)]
fn doc_reject_booking_handler() {}

#[utoipa::path(
    post,
    path = "/bookings/create", // Path relative to /api
    request_body(content = CreateBookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Pending booking created"),
        (status = 400, description = "Missing/invalid field or guide without a detail profile"),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Store failure")
    ),
    tag = "Bookings"
)]
fn doc_create_booking_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_cancel_booking_handler,
        doc_reject_booking_handler,
        doc_create_booking_handler,
    ),
    components(schemas(BookingActionResponse, CreateBookingForm)),
    tags((name = "Bookings", description = "Booking state transitions"))
)]
pub struct BookingsApiDoc;
