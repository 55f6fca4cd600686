//! Audit log domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use comanda_core::ChangeId;

/// One append-only audit record.
#[derive(Debug, Clone, Serialize)]
pub struct Change {
    pub id: ChangeId,
    /// Server-assigned time the change was registered.
    pub timestamp: DateTime<Utc>,
    pub user_name: String,
    pub change_type: String,
    pub change_data: String,
}

/// Payload for registering a change.
///
/// The timestamp is assigned by the server, not the client.
#[derive(Debug, Deserialize)]
pub struct NewChange {
    pub user_name: String,
    pub change_type: String,
    pub change_data: String,
}
