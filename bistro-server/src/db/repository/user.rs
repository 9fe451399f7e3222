//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate, UserRole};
use shared::util::now_millis;
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, email, name, photo_url, role, created_at FROM user";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!("{USER_SELECT} ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE email = ? LIMIT 1"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Insert a user unless the email is already registered.
///
/// Returns `Ok(None)` for an existing email; the record is left untouched.
pub async fn create_if_absent(pool: &SqlitePool, data: UserCreate) -> RepoResult<Option<i64>> {
    let email = data.email.trim();
    if email.is_empty() {
        return Err(RepoError::Validation("email is required".into()));
    }

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO user (email, name, photo_url, role, created_at) VALUES (?, ?, ?, ?, ?) \
         ON CONFLICT(email) DO NOTHING RETURNING id",
    )
    .bind(email)
    .bind(&data.name)
    .bind(&data.photo_url)
    .bind(UserRole::User)
    .bind(now_millis())
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

/// Set the role of a user, returns rows affected
pub async fn update_role(pool: &SqlitePool, id: i64, role: UserRole) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE user SET role = ? WHERE id = ?")
        .bind(role)
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}
