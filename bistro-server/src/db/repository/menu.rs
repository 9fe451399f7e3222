//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

const MENU_SELECT: &str = "SELECT id, name, category, price, recipe, image, rating FROM menu_item";

fn validate_price(price: f64) -> RepoResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(RepoError::Validation(format!("invalid price: {price}")));
    }
    Ok(())
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!("{MENU_SELECT} ORDER BY category, name"))
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!("{MENU_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<i64> {
    validate_price(data.price)?;
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO menu_item (name, category, price, recipe, image, rating) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.category)
    .bind(data.price)
    .bind(&data.recipe)
    .bind(&data.image)
    .bind(data.rating)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Partial update; absent fields keep their stored value. Returns rows affected.
pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<u64> {
    if let Some(price) = data.price {
        validate_price(price)?;
    }
    let rows = sqlx::query(
        "UPDATE menu_item SET name = COALESCE(?1, name), category = COALESCE(?2, category), \
         price = COALESCE(?3, price), recipe = COALESCE(?4, recipe), image = COALESCE(?5, image), \
         rating = COALESCE(?6, rating) WHERE id = ?7",
    )
    .bind(data.name)
    .bind(data.category)
    .bind(data.price)
    .bind(data.recipe)
    .bind(data.image)
    .bind(data.rating)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();
    Ok(rows)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}
