//! Cart Item Model

use serde::{Deserialize, Serialize};

/// Cart entry owned by an email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub email: String,
    /// Menu item reference
    pub menu_item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub created_at: i64,
}

/// Add-to-cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreate {
    pub email: String,
    #[serde(alias = "menuId")]
    pub menu_item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

/// Query string of `GET /carts`
#[derive(Debug, Clone, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}
