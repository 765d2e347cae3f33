#[cfg(test)]
mod tests {
    use crate::error::BookingActionError;
    use crate::logic::{
        cancel_booking, create_booking, parse_form_date, reject_booking, CreateBookingRequest,
    };
    use chrono::{TimeZone, Utc};
    use tourlink_auth::UserIdentity;
    use tourlink_common::RecordingCacheInvalidator;
    use tourlink_db::{Booking, BookingStatus, InMemoryBookingRepository};

    fn traveler() -> UserIdentity {
        UserIdentity {
            id: "traveler-1".to_string(),
            email: Some("traveler@example.test".to_string()),
        }
    }

    fn guide() -> UserIdentity {
        UserIdentity {
            id: "guide-1".to_string(),
            email: None,
        }
    }

    fn pending_booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            traveler_id: "traveler-1".to_string(),
            guide_id: "guide-1".to_string(),
            status: BookingStatus::Pending,
            start_date: Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 9, 12, 18, 0, 0).unwrap(),
            total_price: 320.0,
        }
    }

    #[tokio::test]
    async fn owner_cancel_transitions_and_invalidates_traveler_views() {
        let store = InMemoryBookingRepository::new();
        store.seed_booking(pending_booking("b-1"));
        let cache = RecordingCacheInvalidator::new();

        cancel_booking(&store, &cache, &traveler(), "b-1")
            .await
            .unwrap();

        assert_eq!(store.status_of("b-1"), Some(BookingStatus::Cancelled));
        assert_eq!(
            cache.invalidated(),
            vec!["/traveler/bookings".to_string(), "/traveler/home".to_string()]
        );
    }

    #[tokio::test]
    async fn cancel_by_another_traveler_is_a_no_op_success() {
        let store = InMemoryBookingRepository::new();
        store.seed_booking(pending_booking("b-1"));
        let cache = RecordingCacheInvalidator::new();
        let stranger = UserIdentity {
            id: "traveler-9".to_string(),
            email: None,
        };

        // Succeeds at the contract level but changes nothing.
        cancel_booking(&store, &cache, &stranger, "b-1")
            .await
            .unwrap();

        assert_eq!(store.status_of("b-1"), Some(BookingStatus::Pending));
    }

    #[tokio::test]
    async fn cancel_of_unknown_booking_is_a_no_op_success() {
        let store = InMemoryBookingRepository::new();
        let cache = RecordingCacheInvalidator::new();

        cancel_booking(&store, &cache, &traveler(), "does-not-exist")
            .await
            .unwrap();

        // The views are still invalidated; the handler cannot tell the
        // zero-row case apart from a real transition.
        assert_eq!(cache.invalidated().len(), 2);
    }

    #[tokio::test]
    async fn owner_reject_declines_and_invalidates_the_dashboard() {
        let store = InMemoryBookingRepository::new();
        store.seed_booking(pending_booking("b-1"));
        let cache = RecordingCacheInvalidator::new();

        reject_booking(&store, &cache, &guide(), "b-1").await.unwrap();

        assert_eq!(store.status_of("b-1"), Some(BookingStatus::Declined));
        assert_eq!(cache.invalidated(), vec!["/guide/dashboard".to_string()]);
    }

    #[tokio::test]
    async fn reject_has_no_current_status_guard() {
        // A decline can overwrite an already-cancelled booking; the update
        // matches on id + guide_id only. Documented behavior, not a bug in
        // this layer.
        let store = InMemoryBookingRepository::new();
        let mut booking = pending_booking("b-1");
        booking.status = BookingStatus::Cancelled;
        store.seed_booking(booking);
        let cache = RecordingCacheInvalidator::new();

        reject_booking(&store, &cache, &guide(), "b-1").await.unwrap();

        assert_eq!(store.status_of("b-1"), Some(BookingStatus::Declined));
    }

    #[tokio::test]
    async fn create_requires_a_guide_detail_profile() {
        let store = InMemoryBookingRepository::new();
        let cache = RecordingCacheInvalidator::new();
        let request = CreateBookingRequest {
            guide_id: "guide-unregistered".to_string(),
            start_date: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 10, 3, 0, 0, 0).unwrap(),
            total_price: 150.0,
        };

        let result = create_booking(&store, &cache, &traveler(), request).await;

        assert!(matches!(result, Err(BookingActionError::GuideProfileMissing)));
        assert!(cache.invalidated().is_empty());
    }

    #[tokio::test]
    async fn create_inserts_a_pending_booking_owned_by_the_caller() {
        let store = InMemoryBookingRepository::new();
        store.register_guide_profile("guide-1");
        let cache = RecordingCacheInvalidator::new();
        let request = CreateBookingRequest {
            guide_id: "guide-1".to_string(),
            start_date: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 10, 3, 0, 0, 0).unwrap(),
            total_price: 150.0,
        };

        let booking = create_booking(&store, &cache, &traveler(), request)
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.traveler_id, "traveler-1");
        assert_eq!(store.status_of(&booking.id), Some(BookingStatus::Pending));
        assert_eq!(
            cache.invalidated(),
            vec!["/guide/dashboard".to_string(), "/traveler/bookings".to_string()]
        );
    }

    #[test]
    fn form_dates_accept_rfc3339_and_bare_dates() {
        let full = parse_form_date("2026-09-10T09:00:00Z").unwrap();
        assert_eq!(full, Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap());

        let bare = parse_form_date("2026-09-10").unwrap();
        assert_eq!(bare, Utc.with_ymd_and_hms(2026, 9, 10, 0, 0, 0).unwrap());

        assert!(parse_form_date("next tuesday").is_none());
    }
}
