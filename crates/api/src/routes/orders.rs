//! Order resource handlers.
//!
//! Orders are the only resource with a nested relation: GET responses
//! include the order's line items in creation order.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use comanda_core::OrderId;

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::models::order::{NewOrder, Order};
use crate::state::AppState;

/// Build the order routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// List all orders with their nested line items.
async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}

/// Get a single order by id, with nested line items.
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, AppError> {
    let order = OrderRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(order))
}

/// Open a new order with no line items.
async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<NewOrder>,
) -> Result<impl IntoResponse, AppError> {
    OrderRepository::new(state.pool()).create(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Order created successfully" })),
    ))
}

/// Full-replace update of an order's mutable fields.
async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(input): Json<NewOrder>,
) -> Result<impl IntoResponse, AppError> {
    OrderRepository::new(state.pool()).update(id, &input).await?;

    Ok(Json(json!({ "message": "Order updated successfully" })))
}

/// Physically delete an order. Its line items are not cascaded.
async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<impl IntoResponse, AppError> {
    OrderRepository::new(state.pool()).delete(id).await?;

    Ok(Json(json!({ "message": "Order deleted successfully" })))
}
