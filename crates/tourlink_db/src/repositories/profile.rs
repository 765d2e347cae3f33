//! Profile lookup repository.
//!
//! Only the `find_user` diagnostic tool uses this; the product surface never
//! reads profiles directly.

use crate::error::DbError;
use crate::DbClient;
use serde::Serialize;
use sqlx::Row;
use tourlink_common::BoxFuture;

/// A user profile row as the lookup tool prints it.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
}

pub trait ProfileRepository: Send + Sync {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Case-insensitive substring search over display names.
    fn search_by_name(&self, fragment: &str) -> BoxFuture<'_, Vec<Profile>, DbError>;
}

#[derive(Debug, Clone)]
pub struct SqlProfileRepository {
    db_client: DbClient,
}

impl SqlProfileRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl ProfileRepository for SqlProfileRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            self.db_client
                .execute(
                    r#"
                    CREATE TABLE IF NOT EXISTS profiles (
                        id TEXT PRIMARY KEY,
                        full_name TEXT NOT NULL,
                        email TEXT
                    )
                    "#,
                )
                .await?;
            Ok(())
        })
    }

    fn search_by_name(&self, fragment: &str) -> BoxFuture<'_, Vec<Profile>, DbError> {
        let pattern = format!("%{}%", fragment.to_lowercase());
        Box::pin(async move {
            let rows = sqlx::query(
                "SELECT id, full_name, email FROM profiles WHERE lower(full_name) LIKE $1",
            )
            .bind(&pattern)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(DbError::from)?;

            rows.iter()
                .map(|row| {
                    Ok(Profile {
                        id: row
                            .try_get("id")
                            .map_err(|e| DbError::MappingError(e.to_string()))?,
                        full_name: row
                            .try_get("full_name")
                            .map_err(|e| DbError::MappingError(e.to_string()))?,
                        email: row
                            .try_get("email")
                            .map_err(|e| DbError::MappingError(e.to_string()))?,
                    })
                })
                .collect()
        })
    }
}
