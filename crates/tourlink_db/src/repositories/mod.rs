//! Repository implementations for the Tourlink database layer.

pub mod booking;
pub mod booking_memory;
pub mod booking_sql;
pub mod profile;

pub use booking::{
    Booking, BookingRepository, BookingStatus, NewBooking, OwnedStatusUpdate, OwnerField,
};
pub use booking_memory::InMemoryBookingRepository;
pub use booking_sql::SqlBookingRepository;
pub use profile::{Profile, ProfileRepository, SqlProfileRepository};
