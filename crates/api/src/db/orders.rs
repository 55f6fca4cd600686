//! Order repository.
//!
//! Orders serialize with their line items nested, so reads join in the
//! matching `order_items` rows (grouped in memory; the relation is a
//! single foreign key).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use comanda_core::OrderId;

use super::RepositoryError;
use super::order_items::OrderItemRepository;
use crate::models::order::{NewOrder, Order};
use crate::models::order_item::OrderItem;

/// Internal row type for order queries (without items).
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    table_number: i64,
    number_of_people: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId::new(self.id),
            table_number: self.table_number,
            number_of_people: self.number_of_people,
            created_at: self.created_at,
            updated_at: self.updated_at,
            items,
        }
    }
}

const ORDER_COLUMNS: &str = "id, table_number, number_of_people, created_at, updated_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders in id order, each with its nested line items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails, or
    /// `RepositoryError::DataCorruption` if a stored line item is invalid.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
                .fetch_all(self.pool)
                .await?;

        // One pass over all line items instead of a query per order.
        let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for item in OrderItemRepository::new(self.pool).list().await? {
            items_by_order
                .entry(item.order_id.as_i64())
                .or_default()
                .push(item);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect())
    }

    /// Get an order by its ID, with nested line items.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"))
                .bind(id.as_i64())
                .fetch_optional(self.pool)
                .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = OrderItemRepository::new(self.pool)
            .list_for_order(id)
            .await?;

        Ok(Some(row.into_order(items)))
    }

    /// Create a new order with no line items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewOrder) -> Result<Order, RepositoryError> {
        let now = Utc::now();
        let row: OrderRow = sqlx::query_as(&format!(
            "INSERT INTO orders (table_number, number_of_people, created_at, updated_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(input.table_number)
        .bind(input.number_of_people)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into_order(Vec::new()))
    }

    /// Overwrite every mutable field of an existing order, refreshing
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this id.
    pub async fn update(&self, id: OrderId, input: &NewOrder) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE orders \
             SET table_number = ?, number_of_people = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(input.table_number)
        .bind(input.number_of_people)
        .bind(Utc::now())
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an order by its ID.
    ///
    /// Line items are not cascaded; the schema defines no cascade policy.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this id.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
