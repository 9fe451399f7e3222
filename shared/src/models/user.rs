//! User Model

use serde::{Deserialize, Serialize};

/// Stored role of a user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// User entity (email is the natural key)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub role: UserRole,
    pub created_at: i64,
}

/// Create user payload (sent on first sign-in)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    pub name: Option<String>,
    #[serde(alias = "photoURL")]
    pub photo_url: Option<String>,
}

/// Role change payload (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleUpdate {
    pub role: UserRole,
}
