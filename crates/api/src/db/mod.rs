//! Database operations for the ordering API.
//!
//! # Tables
//!
//! - `users` - Staff accounts (`user_name` unique)
//! - `changes` - Append-only audit log
//! - `orders` - Open table orders
//! - `order_items` - Line items, one row per `(order, catalog item)` pick
//! - `food_items` / `store_items` / `aquatic_items` - The three catalogs
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/api/migrations/` and applied on
//! startup via [`MIGRATOR`].

pub mod catalog;
pub mod changes;
pub mod order_items;
pub mod orders;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use changes::ChangeRepository;
pub use order_items::OrderItemRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique `user_name`).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
