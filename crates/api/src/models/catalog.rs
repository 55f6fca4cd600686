//! Catalog item domain types.
//!
//! The three catalogs (food, store, aquatic) share one shape; only food
//! items carry a `status` column, so it is optional here and omitted from
//! serialization for the other two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use comanda_core::CatalogItemId;

/// A row in one of the three catalog tables.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    /// Availability label; present for food items only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or fully replacing a catalog item.
///
/// `status` is required for food items and ignored for the other
/// catalogs.
#[derive(Debug, Deserialize)]
pub struct NewCatalogItem {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub status: Option<String>,
}
