//! Cart Item Repository

use super::RepoResult;
use shared::models::{CartItem, CartItemCreate};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};

const CART_SELECT: &str =
    "SELECT id, email, menu_item_id, name, image, price, created_at FROM cart_item";

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Vec<CartItem>> {
    let items = sqlx::query_as::<_, CartItem>(&format!(
        "{CART_SELECT} WHERE email = ? ORDER BY id"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(pool: &SqlitePool, data: CartItemCreate) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO cart_item (email, menu_item_id, name, image, price, created_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.email)
    .bind(data.menu_item_id)
    .bind(&data.name)
    .bind(&data.image)
    .bind(data.price)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM cart_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}

/// Delete every listed cart entry. Ids already gone are skipped.
///
/// Takes a connection so settlement can run it inside its transaction.
pub async fn delete_many(conn: &mut SqliteConnection, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let ids_json = serde_json::to_string(ids)
        .map_err(|e| super::RepoError::Database(format!("encode cart ids: {e}")))?;
    let rows = sqlx::query("DELETE FROM cart_item WHERE id IN (SELECT value FROM json_each(?))")
        .bind(ids_json)
        .execute(conn)
        .await?
        .rows_affected();
    Ok(rows)
}
