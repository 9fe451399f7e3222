//! Analytics result models

use serde::{Deserialize, Serialize};

/// Dashboard summary (`GET /admin_stats`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub users: i64,
    pub menu_items: i64,
    pub orders: i64,
    /// Sum of all payment prices (0 without payments)
    pub total_revenue: f64,
}

/// Line items sold per menu category (`GET /order_stats`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub quantity: i64,
    pub total_revenue: f64,
}

/// Best-selling menu item (`GET /top_sales_items`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TopSalesItem {
    pub item_id: i64,
    pub item_name: String,
    pub price: f64,
    pub image: String,
    pub quantity_sold: i64,
    pub total_revenue: f64,
}
