//! Catalog resource handlers.
//!
//! One handler set serves all three catalogs; the mounted [`ItemKind`] is
//! injected as an extension so `/fooditems`, `/storeitems`, and
//! `/aquaticitems` share the same code.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use comanda_core::{CatalogItemId, ItemKind};

use crate::db::CatalogRepository;
use crate::error::AppError;
use crate::models::catalog::{CatalogItem, NewCatalogItem};
use crate::state::AppState;

/// The URL segment a catalog is mounted under.
pub(crate) const fn base_path(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Food => "/fooditems",
        ItemKind::Store => "/storeitems",
        ItemKind::Aquatic => "/aquaticitems",
    }
}

/// The entity label used in success messages and errors.
const fn label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Food => "Food item",
        ItemKind::Store => "Store item",
        ItemKind::Aquatic => "Aquatic item",
    }
}

/// Build the routes for one catalog.
pub fn router(kind: ItemKind) -> Router<AppState> {
    let item_path = format!("{}/{{id}}", base_path(kind));

    Router::new()
        .route(base_path(kind), get(list_items).post(create_item))
        .route(
            &item_path,
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(Extension(kind))
}

/// Enforce the status column's presence per catalog: required for food,
/// dropped for the other two.
fn normalize(kind: ItemKind, mut input: NewCatalogItem) -> Result<NewCatalogItem, AppError> {
    if kind == ItemKind::Food {
        if input.status.is_none() {
            return Err(AppError::BadRequest(
                "status is required for food items".to_owned(),
            ));
        }
    } else {
        input.status = None;
    }
    Ok(input)
}

/// List all items of this catalog.
async fn list_items(
    State(state): State<AppState>,
    Extension(kind): Extension<ItemKind>,
) -> Result<Json<Vec<CatalogItem>>, AppError> {
    let items = CatalogRepository::new(state.pool(), kind).list().await?;
    Ok(Json(items))
}

/// Get a single catalog item by id.
async fn get_item(
    State(state): State<AppState>,
    Extension(kind): Extension<ItemKind>,
    Path(id): Path<CatalogItemId>,
) -> Result<Json<CatalogItem>, AppError> {
    let item = CatalogRepository::new(state.pool(), kind)
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {id}", label(kind))))?;

    Ok(Json(item))
}

/// Create a catalog item.
async fn create_item(
    State(state): State<AppState>,
    Extension(kind): Extension<ItemKind>,
    Json(input): Json<NewCatalogItem>,
) -> Result<impl IntoResponse, AppError> {
    let input = normalize(kind, input)?;
    CatalogRepository::new(state.pool(), kind)
        .create(&input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": format!("{} created successfully", label(kind)) })),
    ))
}

/// Full-replace update of a catalog item.
async fn update_item(
    State(state): State<AppState>,
    Extension(kind): Extension<ItemKind>,
    Path(id): Path<CatalogItemId>,
    Json(input): Json<NewCatalogItem>,
) -> Result<impl IntoResponse, AppError> {
    let input = normalize(kind, input)?;
    CatalogRepository::new(state.pool(), kind)
        .update(id, &input)
        .await?;

    Ok(Json(
        json!({ "message": format!("{} updated successfully", label(kind)) }),
    ))
}

/// Physically delete a catalog item.
async fn delete_item(
    State(state): State<AppState>,
    Extension(kind): Extension<ItemKind>,
    Path(id): Path<CatalogItemId>,
) -> Result<impl IntoResponse, AppError> {
    CatalogRepository::new(state.pool(), kind).delete(id).await?;

    Ok(Json(
        json!({ "message": format!("{} deleted successfully", label(kind)) }),
    ))
}
