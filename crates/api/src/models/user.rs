//! User domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use comanda_core::UserId;

/// A staff user as exposed over the API.
///
/// Deliberately has no password field: the stored password can never leak
/// into a serialized response.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Free-form role label (e.g., "waiter").
    pub role: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Login name, unique across users.
    pub user_name: String,
}

/// Payload for creating or fully replacing a user.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub role: String,
    pub date_of_birth: NaiveDate,
    pub user_name: String,
    pub password: String,
}
