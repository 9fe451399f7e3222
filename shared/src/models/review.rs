//! Review Model

use serde::{Deserialize, Serialize};

/// Customer review (append-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub details: String,
    pub rating: f64,
    pub created_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub name: String,
    pub email: Option<String>,
    pub details: String,
    pub rating: f64,
}
