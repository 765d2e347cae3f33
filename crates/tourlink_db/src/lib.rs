//! Database integration for Tourlink.
//!
//! This crate wraps the relational store the platform delegates persistence
//! to: a database-agnostic client over SQLx's `Any` driver, a typed
//! conditional-update command, and repositories for bookings and profiles.
//! The ownership invariant (only the owning traveler cancels, only the
//! owning guide declines) is enforced here as a single guarded statement,
//! never as a read followed by a write.

pub mod client;
pub mod command;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use command::ConditionalUpdate;
pub use error::DbError;
pub use repositories::{
    Booking, BookingRepository, BookingStatus, InMemoryBookingRepository, NewBooking,
    OwnedStatusUpdate, OwnerField, Profile, ProfileRepository, SqlBookingRepository,
    SqlProfileRepository,
};
