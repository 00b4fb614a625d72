//! Data structures for authentication-related entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{Role, UserRow};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// The authenticated account attached to gated requests.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: &'static str,
}

impl From<&CurrentUser> for AccountResponse {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            role: user.role.as_str(),
        }
    }
}

impl CurrentUser {
    /// `None` when the stored role string is not a known role; such
    /// accounts never pass the gate.
    pub fn from_row(row: UserRow) -> Option<Self> {
        let role = Role::parse(&row.role)?;

        Some(Self {
            id: row.id,
            username: row.username,
            display_name: row.display_name,
            role,
        })
    }
}
