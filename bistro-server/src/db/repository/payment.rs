//! Payment Repository
//!
//! A payment row is the settled form of a cart: inserting one removes the
//! cart entries it lists, inside a single transaction.

use super::{RepoError, RepoResult, cart};
use shared::models::{Payment, PaymentCreate, PaymentStatus};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};

const PAYMENT_SELECT: &str = "SELECT id, email, price, transaction_id, date, cart_ids, menu_item_ids, status, created_at FROM payment";

/// Outcome of a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub payment_id: i64,
    /// False when the transaction id was already recorded
    pub inserted: bool,
    pub carts_deleted: u64,
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let rows = sqlx::query_as::<_, Payment>(&format!("{PAYMENT_SELECT} ORDER BY id DESC"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Vec<Payment>> {
    let rows = sqlx::query_as::<_, Payment>(&format!(
        "{PAYMENT_SELECT} WHERE email = ? ORDER BY id DESC"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payment>> {
    let row = sqlx::query_as::<_, Payment>(&format!("{PAYMENT_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn find_id_by_transaction(
    conn: &mut SqliteConnection,
    transaction_id: &str,
) -> RepoResult<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM payment WHERE transaction_id = ?")
        .bind(transaction_id)
        .fetch_optional(conn)
        .await?;
    Ok(id)
}

/// Record a payment and clear its cart entries atomically.
///
/// Replaying the same `transaction_id` keeps the stored payment and only
/// re-runs the cart cleanup, so a retried settlement converges.
pub async fn settle(pool: &SqlitePool, data: PaymentCreate) -> RepoResult<Settlement> {
    if !data.price.is_finite() || data.price < 0.0 {
        return Err(RepoError::Validation(format!("invalid price: {}", data.price)));
    }
    if data.transaction_id.trim().is_empty() {
        return Err(RepoError::Validation("transactionId is required".into()));
    }

    let cart_ids = serde_json::to_string(&data.cart_ids)
        .map_err(|e| RepoError::Database(format!("encode cart ids: {e}")))?;
    let menu_item_ids = serde_json::to_string(&data.menu_item_ids)
        .map_err(|e| RepoError::Database(format!("encode menu item ids: {e}")))?;
    let date = data
        .date
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

    let mut tx = pool.begin().await?;

    let (payment_id, inserted) = match find_id_by_transaction(&mut tx, &data.transaction_id).await? {
        Some(existing) => (existing, false),
        None => {
            let id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO payment (email, price, transaction_id, date, cart_ids, menu_item_ids, status, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
            )
            .bind(&data.email)
            .bind(data.price)
            .bind(&data.transaction_id)
            .bind(&date)
            .bind(&cart_ids)
            .bind(&menu_item_ids)
            .bind(PaymentStatus::Pending)
            .bind(now_millis())
            .fetch_one(&mut *tx)
            .await?;
            (id, true)
        }
    };

    let carts_deleted = cart::delete_many(&mut tx, &data.cart_ids).await?;

    tx.commit().await?;

    Ok(Settlement {
        payment_id,
        inserted,
        carts_deleted,
    })
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: PaymentStatus) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE payment SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}
