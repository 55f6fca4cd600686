//! Shared type definitions.

pub mod id;
pub mod item_kind;

pub use id::{CatalogItemId, ChangeId, OrderId, OrderItemId, UserId};
pub use item_kind::{ItemKind, ParseItemKindError};
