//! Catalog item tag for order line items.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The catalog an order line item points into.
///
/// An order item references a catalog row as a `(item_type, item_id)` pair.
/// This closed enum replaces the free-text tag so that a line item can only
/// name one of the three catalog tables; the referenced row itself is
/// resolved at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Food,
    Store,
    Aquatic,
}

/// Error parsing an [`ItemKind`] from its string tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown item kind: {0}")]
pub struct ParseItemKindError(pub String);

impl ItemKind {
    /// Every catalog, in mount order.
    pub const ALL: [Self; 3] = [Self::Food, Self::Store, Self::Aquatic];

    /// The wire/storage tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Store => "store",
            Self::Aquatic => "aquatic",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = ParseItemKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Self::Food),
            "store" => Ok(Self::Store),
            "aquatic" => Ok(Self::Aquatic),
            other => Err(ParseItemKindError(other.to_owned())),
        }
    }
}
