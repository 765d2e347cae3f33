//! In-memory implementation of the booking repository.
//!
//! Backs the integration tests and keyless dev runs. Behaves like the SQL
//! implementation for everything the handlers observe, including the
//! zero-rows-matched result of a conditional update whose owner check fails.

use crate::error::DbError;
use crate::repositories::booking::{
    Booking, BookingRepository, BookingStatus, NewBooking, OwnedStatusUpdate, OwnerField,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tourlink_common::BoxFuture;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<HashMap<String, Booking>>,
    guide_profiles: Mutex<HashSet<String>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a booking directly, bypassing the create flow.
    pub fn seed_booking(&self, booking: Booking) {
        self.bookings
            .lock()
            .expect("booking map lock poisoned")
            .insert(booking.id.clone(), booking);
    }

    /// Mark a guide as having a detail profile.
    pub fn register_guide_profile(&self, guide_id: impl Into<String>) {
        self.guide_profiles
            .lock()
            .expect("guide profile lock poisoned")
            .insert(guide_id.into());
    }

    /// Current status of a booking, for assertions.
    pub fn status_of(&self, id: &str) -> Option<BookingStatus> {
        self.bookings
            .lock()
            .expect("booking map lock poisoned")
            .get(id)
            .map(|b| b.status)
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async { Ok(()) })
    }

    fn create(&self, booking: NewBooking) -> BoxFuture<'_, Booking, DbError> {
        Box::pin(async move {
            let created = Booking {
                id: Uuid::new_v4().to_string(),
                traveler_id: booking.traveler_id,
                guide_id: booking.guide_id,
                status: BookingStatus::Pending,
                start_date: booking.start_date,
                end_date: booking.end_date,
                total_price: booking.total_price,
            };
            self.seed_booking(created.clone());
            Ok(created)
        })
    }

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Booking>, DbError> {
        let id = id.to_owned();
        Box::pin(async move {
            Ok(self
                .bookings
                .lock()
                .expect("booking map lock poisoned")
                .get(&id)
                .cloned())
        })
    }

    fn update_status_if_owner(&self, update: OwnedStatusUpdate) -> BoxFuture<'_, u64, DbError> {
        Box::pin(async move {
            let mut bookings = self.bookings.lock().expect("booking map lock poisoned");
            let Some(booking) = bookings.get_mut(&update.booking_id) else {
                return Ok(0);
            };
            let owner_matches = match update.owner {
                OwnerField::Traveler => booking.traveler_id == update.owner_id,
                OwnerField::Guide => booking.guide_id == update.owner_id,
            };
            if !owner_matches {
                return Ok(0);
            }
            booking.status = update.status;
            Ok(1)
        })
    }

    fn guide_profile_exists(&self, guide_id: &str) -> BoxFuture<'_, bool, DbError> {
        let guide_id = guide_id.to_owned();
        Box::pin(async move {
            Ok(self
                .guide_profiles
                .lock()
                .expect("guide profile lock poisoned")
                .contains(&guide_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pending_booking(id: &str, traveler: &str, guide: &str) -> Booking {
        Booking {
            id: id.to_string(),
            traveler_id: traveler.to_string(),
            guide_id: guide.to_string(),
            status: BookingStatus::Pending,
            start_date: Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 9, 12, 18, 0, 0).unwrap(),
            total_price: 240.0,
        }
    }

    #[tokio::test]
    async fn owner_match_updates_exactly_one_row() {
        let repo = InMemoryBookingRepository::new();
        repo.seed_booking(pending_booking("b-1", "t-1", "g-1"));

        let rows = repo
            .update_status_if_owner(OwnedStatusUpdate {
                booking_id: "b-1".to_string(),
                owner: OwnerField::Traveler,
                owner_id: "t-1".to_string(),
                status: BookingStatus::Cancelled,
            })
            .await
            .unwrap();

        assert_eq!(rows, 1);
        assert_eq!(repo.status_of("b-1"), Some(BookingStatus::Cancelled));
    }

    #[tokio::test]
    async fn owner_mismatch_matches_zero_rows_and_leaves_status() {
        let repo = InMemoryBookingRepository::new();
        repo.seed_booking(pending_booking("b-1", "t-1", "g-1"));

        let rows = repo
            .update_status_if_owner(OwnedStatusUpdate {
                booking_id: "b-1".to_string(),
                owner: OwnerField::Traveler,
                owner_id: "t-9".to_string(),
                status: BookingStatus::Cancelled,
            })
            .await
            .unwrap();

        assert_eq!(rows, 0);
        assert_eq!(repo.status_of("b-1"), Some(BookingStatus::Pending));
    }
}
