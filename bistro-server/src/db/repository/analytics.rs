//! Sales analytics over settled payments
//!
//! Each payment's `menu_item_ids` array is expanded with `json_each` and
//! joined to the current `menu_item` row. Ids that no longer resolve drop
//! out, and revenue always reflects today's menu prices.

use super::RepoResult;
use shared::models::{AdminStats, CategoryStat, TopSalesItem};
use sqlx::SqlitePool;

/// Number of entries returned by [`top_sales_items`]
pub const TOP_SALES_LIMIT: i64 = 5;

pub async fn admin_stats(pool: &SqlitePool) -> RepoResult<AdminStats> {
    let stats = sqlx::query_as::<_, AdminStats>(
        "SELECT \
            (SELECT COUNT(*) FROM user) AS users, \
            (SELECT COUNT(*) FROM menu_item) AS menu_items, \
            (SELECT COUNT(*) FROM payment) AS orders, \
            (SELECT COALESCE(SUM(price), 0.0) FROM payment) AS total_revenue",
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}

pub async fn order_stats(pool: &SqlitePool) -> RepoResult<Vec<CategoryStat>> {
    let rows = sqlx::query_as::<_, CategoryStat>(
        "SELECT m.category AS category, \
                COUNT(*) AS quantity, \
                SUM(m.price) AS total_revenue \
         FROM payment p, json_each(p.menu_item_ids) j \
         JOIN menu_item m ON m.id = j.value \
         GROUP BY m.category \
         ORDER BY m.category",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Best sellers by quantity, descending. Ties keep whatever order SQLite yields.
pub async fn top_sales_items(pool: &SqlitePool) -> RepoResult<Vec<TopSalesItem>> {
    let rows = sqlx::query_as::<_, TopSalesItem>(
        "SELECT m.id AS item_id, \
                m.name AS item_name, \
                m.price AS price, \
                m.image AS image, \
                COUNT(*) AS quantity_sold, \
                SUM(m.price) AS total_revenue \
         FROM payment p, json_each(p.menu_item_ids) j \
         JOIN menu_item m ON m.id = j.value \
         GROUP BY m.id \
         ORDER BY quantity_sold DESC \
         LIMIT ?",
    )
    .bind(TOP_SALES_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
