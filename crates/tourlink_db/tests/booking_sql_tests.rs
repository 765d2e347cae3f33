//! Integration tests for the SQL booking repository against sqlite.

use chrono::{TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};
use tourlink_db::{
    BookingRepository, BookingStatus, DbClient, NewBooking, OwnedStatusUpdate, OwnerField,
    SqlBookingRepository,
};

async fn test_client(tag: &str) -> DbClient {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "tourlink-test-{}-{}-{}.db",
        tag,
        std::process::id(),
        nanos
    ));
    let url = format!("sqlite://{}?mode=rwc", path.display());

    DbClient::from_url(&url).await.expect("sqlite connects")
}

async fn test_repository(tag: &str) -> SqlBookingRepository {
    let repository = SqlBookingRepository::new(test_client(tag).await);
    repository.init_schema().await.expect("schema initializes");
    repository
}

fn new_booking(traveler: &str, guide: &str) -> NewBooking {
    NewBooking {
        traveler_id: traveler.to_string(),
        guide_id: guide.to_string(),
        start_date: Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2026, 9, 12, 18, 0, 0).unwrap(),
        total_price: 240.5,
    }
}

#[tokio::test]
async fn init_schema_is_idempotent() {
    let repository = test_repository("schema").await;
    repository.init_schema().await.expect("second init succeeds");
}

#[tokio::test]
async fn created_bookings_round_trip_through_the_store() {
    let repository = test_repository("roundtrip").await;

    let created = repository
        .create(new_booking("traveler-1", "guide-1"))
        .await
        .unwrap();
    assert_eq!(created.status, BookingStatus::Pending);

    let fetched = repository
        .find_by_id(&created.id)
        .await
        .unwrap()
        .expect("booking exists");
    assert_eq!(fetched.traveler_id, "traveler-1");
    assert_eq!(fetched.guide_id, "guide-1");
    assert_eq!(fetched.status, BookingStatus::Pending);
    assert_eq!(fetched.start_date, created.start_date);
    assert_eq!(fetched.total_price, 240.5);

    let missing = repository.find_by_id("no-such-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn conditional_update_applies_only_on_owner_match() {
    let repository = test_repository("owner").await;
    let booking = repository
        .create(new_booking("traveler-1", "guide-1"))
        .await
        .unwrap();

    // Wrong owner: zero rows, status untouched.
    let rows = repository
        .update_status_if_owner(OwnedStatusUpdate {
            booking_id: booking.id.clone(),
            owner: OwnerField::Traveler,
            owner_id: "traveler-9".to_string(),
            status: BookingStatus::Cancelled,
        })
        .await
        .unwrap();
    assert_eq!(rows, 0);
    let unchanged = repository.find_by_id(&booking.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, BookingStatus::Pending);

    // Right owner: one row.
    let rows = repository
        .update_status_if_owner(OwnedStatusUpdate {
            booking_id: booking.id.clone(),
            owner: OwnerField::Traveler,
            owner_id: "traveler-1".to_string(),
            status: BookingStatus::Cancelled,
        })
        .await
        .unwrap();
    assert_eq!(rows, 1);
    let cancelled = repository.find_by_id(&booking.id).await.unwrap().unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn guide_owner_check_uses_the_guide_column() {
    let repository = test_repository("guide").await;
    let booking = repository
        .create(new_booking("traveler-1", "guide-1"))
        .await
        .unwrap();

    // The traveler's id against the guide column matches nothing.
    let rows = repository
        .update_status_if_owner(OwnedStatusUpdate {
            booking_id: booking.id.clone(),
            owner: OwnerField::Guide,
            owner_id: "traveler-1".to_string(),
            status: BookingStatus::Declined,
        })
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let rows = repository
        .update_status_if_owner(OwnedStatusUpdate {
            booking_id: booking.id.clone(),
            owner: OwnerField::Guide,
            owner_id: "guide-1".to_string(),
            status: BookingStatus::Declined,
        })
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn guide_profile_existence_reflects_the_detail_table() {
    let client = test_client("profiles").await;
    let repository = SqlBookingRepository::new(client.clone());
    repository.init_schema().await.expect("schema initializes");

    assert!(!repository.guide_profile_exists("guide-1").await.unwrap());

    client
        .execute("INSERT INTO guides_detail (id) VALUES ('guide-1')")
        .await
        .unwrap();
    assert!(repository.guide_profile_exists("guide-1").await.unwrap());
}
