//! Platform user records returned by the auth endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::BearerToken;

/// A registered platform user.
///
/// The backend never sends the password hash, so this record carries only
/// public profile fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier of the user.
    pub id: String,
    /// The user's email address.
    pub email: String,
    /// The user's display name.
    pub name: String,
    /// When the account was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The result of a successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResult {
    /// The authenticated user.
    pub user: User,
    /// The credential to present on authenticated endpoints.
    pub token: BearerToken,
}
