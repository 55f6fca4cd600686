//! Order line item handlers.
//!
//! Creates and updates resolve both sides of the line item before writing:
//! the order must exist, and the `(item_type, item_id)` pair must name a
//! real catalog row. A dangling reference answers 400.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use comanda_core::OrderItemId;

use crate::db::{CatalogRepository, OrderItemRepository, OrderRepository};
use crate::error::AppError;
use crate::models::order_item::{NewOrderItem, OrderItem};
use crate::state::AppState;

/// Build the order item routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orderitems", get(list_items).post(create_item))
        .route(
            "/orderitems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Reject payloads that reference a missing order or catalog row.
async fn ensure_references(state: &AppState, input: &NewOrderItem) -> Result<(), AppError> {
    if OrderRepository::new(state.pool())
        .get(input.order_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "order {} does not exist",
            input.order_id
        )));
    }

    if CatalogRepository::new(state.pool(), input.item_type)
        .get(input.item_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "{} item {} does not exist",
            input.item_type, input.item_id
        )));
    }

    Ok(())
}

/// List all order line items.
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<OrderItem>>, AppError> {
    let items = OrderItemRepository::new(state.pool()).list().await?;
    Ok(Json(items))
}

/// Get a single line item by id.
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<OrderItemId>,
) -> Result<Json<OrderItem>, AppError> {
    let item = OrderItemRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order item {id}")))?;

    Ok(Json(item))
}

/// Add a line item to an order.
async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<NewOrderItem>,
) -> Result<impl IntoResponse, AppError> {
    ensure_references(&state, &input).await?;
    OrderItemRepository::new(state.pool()).create(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Order item created successfully" })),
    ))
}

/// Full-replace update of a line item.
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<OrderItemId>,
    Json(input): Json<NewOrderItem>,
) -> Result<impl IntoResponse, AppError> {
    ensure_references(&state, &input).await?;
    OrderItemRepository::new(state.pool())
        .update(id, &input)
        .await?;

    Ok(Json(json!({ "message": "Order item updated successfully" })))
}

/// Physically delete a line item.
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<OrderItemId>,
) -> Result<impl IntoResponse, AppError> {
    OrderItemRepository::new(state.pool()).delete(id).await?;

    Ok(Json(json!({ "message": "Order item deleted successfully" })))
}
