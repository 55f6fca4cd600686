//! Audit log repository.
//!
//! The `changes` table is append-only: rows are registered with a
//! server-assigned timestamp and never updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use comanda_core::ChangeId;

use super::RepositoryError;
use crate::models::change::{Change, NewChange};

#[derive(Debug, sqlx::FromRow)]
struct ChangeRow {
    id: i64,
    timestamp: DateTime<Utc>,
    user_name: String,
    change_type: String,
    change_data: String,
}

impl From<ChangeRow> for Change {
    fn from(row: ChangeRow) -> Self {
        Self {
            id: ChangeId::new(row.id),
            timestamp: row.timestamp,
            user_name: row.user_name,
            change_type: row.change_type,
            change_data: row.change_data,
        }
    }
}

/// Repository for audit log operations.
pub struct ChangeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ChangeRepository<'a> {
    /// Create a new change repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an audit record, stamping it with the current time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn record(&self, input: &NewChange) -> Result<Change, RepositoryError> {
        let row: ChangeRow = sqlx::query_as(
            "INSERT INTO changes (timestamp, user_name, change_type, change_data) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, timestamp, user_name, change_type, change_data",
        )
        .bind(Utc::now())
        .bind(&input.user_name)
        .bind(&input.change_type)
        .bind(&input.change_data)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
