//! Generic catalog repository.
//!
//! The three catalog tables (`food_items`, `store_items`, `aquatic_items`)
//! have the same shape apart from the food-only `status` column, so one
//! repository parameterized by [`ItemKind`] serves all of them. Table and
//! column names come from closed `const fn`s; request data is only ever
//! bound as parameters.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use comanda_core::{CatalogItemId, ItemKind};

use super::RepositoryError;
use crate::models::catalog::{CatalogItem, NewCatalogItem};

/// The table backing a catalog.
const fn table(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Food => "food_items",
        ItemKind::Store => "store_items",
        ItemKind::Aquatic => "aquatic_items",
    }
}

/// Whether the catalog carries the `status` column.
const fn has_status(kind: ItemKind) -> bool {
    matches!(kind, ItemKind::Food)
}

/// The selected column list for a catalog.
const fn columns(kind: ItemKind) -> &'static str {
    if has_status(kind) {
        "id, name, price, quantity, status, created_at, updated_at"
    } else {
        "id, name, price, quantity, created_at, updated_at"
    }
}

/// Internal row type shared by all three catalog tables.
#[derive(Debug, sqlx::FromRow)]
struct CatalogItemRow {
    id: i64,
    name: String,
    price: f64,
    quantity: i64,
    /// Only selected for food items; defaults to `None` elsewhere.
    #[sqlx(default)]
    status: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CatalogItemRow> for CatalogItem {
    fn from(row: CatalogItemRow) -> Self {
        Self {
            id: CatalogItemId::new(row.id),
            name: row.name,
            price: row.price,
            quantity: row.quantity,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for one catalog's database operations.
pub struct CatalogRepository<'a> {
    pool: &'a SqlitePool,
    kind: ItemKind,
}

impl<'a> CatalogRepository<'a> {
    /// Create a repository for the given catalog.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, kind: ItemKind) -> Self {
        Self { pool, kind }
    }

    /// List all items of this catalog in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        let rows: Vec<CatalogItemRow> = sqlx::query_as(&format!(
            "SELECT {} FROM {} ORDER BY id",
            columns(self.kind),
            table(self.kind)
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a catalog item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CatalogItemId) -> Result<Option<CatalogItem>, RepositoryError> {
        let row: Option<CatalogItemRow> = sqlx::query_as(&format!(
            "SELECT {} FROM {} WHERE id = ?",
            columns(self.kind),
            table(self.kind)
        ))
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new catalog item.
    ///
    /// `input.status` must be `Some` for the food catalog and `None`
    /// otherwise; the handlers normalize this before calling.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewCatalogItem) -> Result<CatalogItem, RepositoryError> {
        let now = Utc::now();

        let row: CatalogItemRow = if has_status(self.kind) {
            sqlx::query_as(&format!(
                "INSERT INTO {} (name, price, quantity, status, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?, ?) \
                 RETURNING {}",
                table(self.kind),
                columns(self.kind)
            ))
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .bind(&input.status)
            .bind(now)
            .bind(now)
            .fetch_one(self.pool)
            .await?
        } else {
            sqlx::query_as(&format!(
                "INSERT INTO {} (name, price, quantity, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?) \
                 RETURNING {}",
                table(self.kind),
                columns(self.kind)
            ))
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .bind(now)
            .bind(now)
            .fetch_one(self.pool)
            .await?
        };

        Ok(row.into())
    }

    /// Overwrite every mutable field of an existing catalog item,
    /// refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this id.
    pub async fn update(
        &self,
        id: CatalogItemId,
        input: &NewCatalogItem,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now();

        let result = if has_status(self.kind) {
            sqlx::query(&format!(
                "UPDATE {} SET name = ?, price = ?, quantity = ?, status = ?, updated_at = ? \
                 WHERE id = ?",
                table(self.kind)
            ))
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .bind(&input.status)
            .bind(now)
            .bind(id.as_i64())
            .execute(self.pool)
            .await?
        } else {
            sqlx::query(&format!(
                "UPDATE {} SET name = ?, price = ?, quantity = ?, updated_at = ? \
                 WHERE id = ?",
                table(self.kind)
            ))
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .bind(now)
            .bind(id.as_i64())
            .execute(self.pool)
            .await?
        };

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a catalog item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this id.
    pub async fn delete(&self, id: CatalogItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", table(self.kind)))
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
