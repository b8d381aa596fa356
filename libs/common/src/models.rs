//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity as stored in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub registration_date: DateTime<Utc>,
}

/// New user creation payload
///
/// Any `id` or `registrationDate` sent by a client is dropped during
/// deserialization; the registry assigns both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// User update payload
///
/// Fields that are absent or blank leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub id: Option<u64>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Returns the value only when it is present and not blank
pub fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Whether a field carries a usable value
pub fn is_provided(value: Option<&str>) -> bool {
    provided(value).is_some()
}
