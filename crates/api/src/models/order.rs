//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use comanda_core::OrderId;

use super::order_item::OrderItem;

/// An open table order, with its line items nested in creation order.
///
/// The only nested relation in the API: every other resource serializes
/// flat.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub table_number: i64,
    pub number_of_people: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Line items whose `order_id` is this order's id, in id order.
    pub items: Vec<OrderItem>,
}

/// Payload for creating or fully replacing an order.
#[derive(Debug, Deserialize)]
pub struct NewOrder {
    pub table_number: i64,
    pub number_of_people: i64,
}
