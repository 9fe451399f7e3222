//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Current price; analytics always read this value
    pub price: f64,
    pub recipe: String,
    /// Image URL
    pub image: String,
    pub rating: Option<f64>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: String,
    pub image: String,
    pub rating: Option<f64>,
}

/// Update menu item payload
///
/// Only these fields may change; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub recipe: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
}
