//! Review Repository

use super::{RepoError, RepoResult};
use shared::models::{Review, ReviewCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, name, email, details, rating, created_at FROM review ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(reviews)
}

pub async fn create(pool: &SqlitePool, data: ReviewCreate) -> RepoResult<i64> {
    if !(0.0..=5.0).contains(&data.rating) {
        return Err(RepoError::Validation(format!(
            "rating must be between 0 and 5, got {}",
            data.rating
        )));
    }
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO review (name, email, details, rating, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.details)
    .bind(data.rating)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;
    Ok(id)
}
