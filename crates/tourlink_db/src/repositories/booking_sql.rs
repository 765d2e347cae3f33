//! SQL implementation of the booking repository.

use crate::error::DbError;
use crate::repositories::booking::{
    Booking, BookingRepository, BookingStatus, NewBooking, OwnedStatusUpdate,
};
use crate::DbClient;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tourlink_common::BoxFuture;
use tracing::{debug, error, info};
use uuid::Uuid;

/// SQL implementation of the booking repository.
#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    db_client: DbClient,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    fn map_row(row: &sqlx::any::AnyRow) -> Result<Booking, DbError> {
        let status_raw: String = row
            .try_get("status")
            .map_err(|e| DbError::MappingError(e.to_string()))?;
        let status = BookingStatus::parse(&status_raw)
            .ok_or_else(|| DbError::MappingError(format!("unknown booking status: {status_raw}")))?;

        // Dates are stored as RFC 3339 text; sqlx's Any driver has no
        // chrono decode.
        let start_raw: String = row
            .try_get("start_date")
            .map_err(|e| DbError::MappingError(e.to_string()))?;
        let end_raw: String = row
            .try_get("end_date")
            .map_err(|e| DbError::MappingError(e.to_string()))?;
        let start_date = parse_rfc3339(&start_raw)?;
        let end_date = parse_rfc3339(&end_raw)?;

        Ok(Booking {
            id: row
                .try_get("id")
                .map_err(|e| DbError::MappingError(e.to_string()))?,
            traveler_id: row
                .try_get("traveler_id")
                .map_err(|e| DbError::MappingError(e.to_string()))?,
            guide_id: row
                .try_get("guide_id")
                .map_err(|e| DbError::MappingError(e.to_string()))?,
            status,
            start_date,
            end_date,
            total_price: row
                .try_get("total_price")
                .map_err(|e| DbError::MappingError(e.to_string()))?,
        })
    }
}

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::MappingError(format!("invalid stored timestamp {raw}: {e}")))
}

impl BookingRepository for SqlBookingRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing booking schema");

            self.db_client
                .execute(
                    r#"
                    CREATE TABLE IF NOT EXISTS bookings (
                        id TEXT PRIMARY KEY,
                        traveler_id TEXT NOT NULL,
                        guide_id TEXT NOT NULL,
                        status TEXT NOT NULL,
                        start_date TEXT NOT NULL,
                        end_date TEXT NOT NULL,
                        total_price REAL NOT NULL,
                        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                    )
                    "#,
                )
                .await?;

            // Guide detail profiles live in their own table; a guide without
            // one cannot receive bookings.
            self.db_client
                .execute(
                    r#"
                    CREATE TABLE IF NOT EXISTS guides_detail (
                        id TEXT PRIMARY KEY,
                        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                    )
                    "#,
                )
                .await?;

            info!("Booking schema initialized");
            Ok(())
        })
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

            debug!("Inserting booking {} for traveler {}", created.id, created.traveler_id);

            sqlx::query(
                r#"
                INSERT INTO bookings (id, traveler_id, guide_id, status, start_date, end_date, total_price)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&created.id)
            .bind(&created.traveler_id)
            .bind(&created.guide_id)
            .bind(created.status.as_str())
            .bind(created.start_date.to_rfc3339())
            .bind(created.end_date.to_rfc3339())
            .bind(created.total_price)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

            Ok(created)
        })
    }

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Booking>, DbError> {
        let id = id.to_owned();
        Box::pin(async move {
            let row = sqlx::query(
                r#"
                SELECT id, traveler_id, guide_id, status, start_date, end_date, total_price
                FROM bookings
                WHERE id = $1
                "#,
            )
            .bind(&id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(DbError::from)?;

            row.as_ref().map(Self::map_row).transpose()
        })
    }

    fn update_status_if_owner(&self, update: OwnedStatusUpdate) -> BoxFuture<'_, u64, DbError> {
        Box::pin(async move {
            let command = update.to_command();
            debug_assert!(command.is_guarded());
            debug!(
                "Conditional status update: booking={} owner_column={} status={}",
                update.booking_id,
                update.owner.column(),
                update.status.as_str()
            );

            let sql = command.to_sql();
            let mut query = sqlx::query(&sql);
            for value in command.values() {
                query = query.bind(value.to_owned());
            }

            let result = query
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Conditional status update failed: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(result.rows_affected())
        })
    }

    fn guide_profile_exists(&self, guide_id: &str) -> BoxFuture<'_, bool, DbError> {
        let guide_id = guide_id.to_owned();
        Box::pin(async move {
            let row = sqlx::query("SELECT id FROM guides_detail WHERE id = $1")
                .bind(&guide_id)
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(DbError::from)?;
            Ok(row.is_some())
        })
    }
}
