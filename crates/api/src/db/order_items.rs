//! Order line item repository.

use sqlx::SqlitePool;

use comanda_core::{CatalogItemId, OrderId, OrderItemId};

use super::RepositoryError;
use crate::models::order_item::{NewOrderItem, OrderItem};

/// Internal row type for order item queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    item_type: String,
    item_id: i64,
    quantity: i64,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        let item_type = row.item_type.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid item_type in database: {e}"))
        })?;

        Ok(Self {
            id: OrderItemId::new(row.id),
            order_id: OrderId::new(row.order_id),
            item_type,
            item_id: CatalogItemId::new(row.item_id),
            quantity: row.quantity,
        })
    }
}

const ITEM_COLUMNS: &str = "id, order_id, item_type, item_id, quantity";

/// Repository for order line item database operations.
pub struct OrderItemRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderItemRepository<'a> {
    /// Create a new order item repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all order items in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored `item_type` tag is
    /// not a known catalog.
    pub async fn list(&self) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows: Vec<OrderItemRow> =
            sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM order_items ORDER BY id"))
                .fetch_all(self.pool)
                .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// List the line items of one order, in creation (id) order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn list_for_order(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows: Vec<OrderItemRow> = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = ? ORDER BY id"
        ))
        .bind(order_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an order item by its ID.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn get(&self, id: OrderItemId) -> Result<Option<OrderItem>, RepositoryError> {
        let row: Option<OrderItemRow> =
            sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM order_items WHERE id = ?"))
                .bind(id.as_i64())
                .fetch_optional(self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new order item.
    ///
    /// The caller is responsible for having resolved `order_id` and the
    /// `(item_type, item_id)` pair; this method just inserts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewOrderItem) -> Result<OrderItem, RepositoryError> {
        let row: OrderItemRow = sqlx::query_as(&format!(
            "INSERT INTO order_items (order_id, item_type, item_id, quantity) \
             VALUES (?, ?, ?, ?) \
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(input.order_id.as_i64())
        .bind(input.item_type.as_str())
        .bind(input.item_id.as_i64())
        .bind(input.quantity)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Overwrite every mutable field of an existing order item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order item has this id.
    pub async fn update(&self, id: OrderItemId, input: &NewOrderItem) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE order_items \
             SET order_id = ?, item_type = ?, item_id = ?, quantity = ? \
             WHERE id = ?",
        )
        .bind(input.order_id.as_i64())
        .bind(input.item_type.as_str())
        .bind(input.item_id.as_i64())
        .bind(input.quantity)
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an order item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order item has this id.
    pub async fn delete(&self, id: OrderItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
