// --- File: crates/tourlink_bookings/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;

// Re-export for the main backend
pub use error::BookingActionError;
pub use handlers::BookingsState;
pub use routes::routes;
