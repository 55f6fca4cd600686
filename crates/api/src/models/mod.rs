//! Domain models and request payloads.
//!
//! Each resource has a serialized domain type (what GET returns) and a
//! `New*` payload type (what POST/PUT accept). Updates are full-replace:
//! a PUT takes the same payload as a POST and overwrites every mutable
//! field.

pub mod catalog;
pub mod change;
pub mod order;
pub mod order_item;
pub mod user;

pub use catalog::{CatalogItem, NewCatalogItem};
pub use change::{Change, NewChange};
pub use order::{NewOrder, Order};
pub use order_item::{NewOrderItem, OrderItem};
pub use user::{NewUser, User};
