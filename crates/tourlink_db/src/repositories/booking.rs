//! Booking entity and repository trait.
//!
//! The booking lifecycle: `pending` is the state a new request starts in;
//! `confirmed` is set by the guide outside this surface; `cancelled`
//! (traveler-initiated) and `declined` (guide-initiated) are terminal — no
//! handler exposes a transition out of them.

use crate::command::ConditionalUpdate;
use crate::error::DbError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tourlink_common::BoxFuture;

/// Status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Declined,
}

impl BookingStatus {
    /// The value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "declined" => Some(BookingStatus::Declined),
            _ => None,
        }
    }
}

/// Which owner column a guarded status transition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerField {
    Traveler,
    Guide,
}

impl OwnerField {
    pub fn column(&self) -> &'static str {
        match self {
            OwnerField::Traveler => "traveler_id",
            OwnerField::Guide => "guide_id",
        }
    }
}

/// A status transition guarded by primary key and owner match.
#[derive(Debug, Clone)]
pub struct OwnedStatusUpdate {
    pub booking_id: String,
    pub owner: OwnerField,
    pub owner_id: String,
    pub status: BookingStatus,
}

impl OwnedStatusUpdate {
    /// Compile to the single conditional statement the store executes.
    pub fn to_command(&self) -> ConditionalUpdate {
        ConditionalUpdate::new("bookings")
            .set("status", self.status.as_str())
            .matching("id", self.booking_id.as_str())
            .matching(self.owner.column(), self.owner_id.as_str())
    }
}

/// A booking linking one traveler and one guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub traveler_id: String,
    pub guide_id: String,
    pub status: BookingStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: f64,
}

/// Fields supplied when a traveler requests a booking. The store assigns the
/// identifier and the initial `pending` status.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub traveler_id: String,
    pub guide_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: f64,
}

/// Repository for bookings.
///
/// Object-safe so handlers receive an `Arc<dyn BookingRepository>`; the SQL
/// implementation is the production path, the in-memory one backs tests and
/// keyless dev runs.
pub trait BookingRepository: Send + Sync {
    /// Create the backing tables when they do not exist yet.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Insert a new `pending` booking and return it.
    fn create(&self, booking: NewBooking) -> BoxFuture<'_, Booking, DbError>;

    /// Fetch one booking by identifier.
    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Booking>, DbError>;

    /// Execute a guarded status transition and report how many rows matched.
    ///
    /// Zero is not an error: it means no row satisfied both the primary-key
    /// and the owner match — the caller decides what that means.
    fn update_status_if_owner(&self, update: OwnedStatusUpdate) -> BoxFuture<'_, u64, DbError>;

    /// Whether the guide has a detail profile and can receive bookings.
    fn guide_profile_exists(&self, guide_id: &str) -> BoxFuture<'_, bool, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_update_compiles_to_a_guarded_command() {
        let update = OwnedStatusUpdate {
            booking_id: "b-7".to_string(),
            owner: OwnerField::Guide,
            owner_id: "g-2".to_string(),
            status: BookingStatus::Declined,
        };
        let command = update.to_command();
        assert!(command.is_guarded());
        assert_eq!(
            command.to_sql(),
            "UPDATE bookings SET status = $1 WHERE id = $2 AND guide_id = $3"
        );
    }

    #[test]
    fn status_round_trips_through_column_values() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Declined,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("refunded"), None);
    }
}
