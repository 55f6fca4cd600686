//! Order line item domain types.

use serde::{Deserialize, Serialize};

use comanda_core::{CatalogItemId, ItemKind, OrderId, OrderItemId};

/// One line on an order: a quantity of one catalog item.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    /// Which catalog `item_id` points into.
    pub item_type: ItemKind,
    pub item_id: CatalogItemId,
    pub quantity: i64,
}

/// Payload for creating or fully replacing an order line item.
///
/// Both `order_id` and the `(item_type, item_id)` pair are resolved before
/// the write; a dangling reference is rejected.
#[derive(Debug, Deserialize)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub item_type: ItemKind,
    pub item_id: CatalogItemId,
    pub quantity: i64,
}
