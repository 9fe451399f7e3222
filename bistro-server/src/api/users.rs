//! User API Handlers

use axum::extract::{Path, State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{User, UserCreate, UserRoleUpdate};
use shared::response::{AdminCheckResponse, DeleteResult, InsertResult, UpdateResult, UserInsertResult};
use shared::util::parse_id;

use crate::api::extract::Json;
use crate::auth::AuthIdentity;
use crate::db::repository::{RepoError, user};
use crate::state::AppState;

/// GET /users - all users (admin)
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(&state.pool).await?;
    Ok(Json(users))
}

/// POST /users - register on first sign-in, no-op for a known email
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserInsertResult>> {
    let result = match user::create_if_absent(&state.pool, payload).await {
        Ok(Some(id)) => {
            tracing::info!(user_id = id, "User registered");
            UserInsertResult::Inserted(InsertResult::new(id))
        }
        Ok(None) => UserInsertResult::exists(),
        Err(RepoError::Validation(_)) => return Err(AppError::new(ErrorCode::UserEmailRequired)),
        Err(e) => return Err(e.into()),
    };
    Ok(Json(result))
}

/// DELETE /users/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let id = parse_id(&id)?;
    let rows = user::delete(&state.pool, id).await?;
    tracing::info!(user_id = id, deleted = rows, "User deleted");
    Ok(Json(DeleteResult::new(rows)))
}

/// PATCH /users/admin/{id} - change role (admin)
pub async fn set_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserRoleUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    let rows = user::update_role(&state.pool, id, payload.role).await?;
    tracing::info!(user_id = id, role = ?payload.role, "User role updated");
    Ok(Json(UpdateResult::from_rows(rows)))
}

/// GET /users/admin/{email} - whether the caller is an admin
pub async fn check_admin(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Path(email): Path<String>,
) -> AppResult<Json<AdminCheckResponse>> {
    identity.ensure_self(&email)?;
    let admin = user::find_by_email(&state.pool, &email)
        .await?
        .is_some_and(|u| u.role.is_admin());
    Ok(Json(AdminCheckResponse { admin }))
}
