//! Menu API Handlers

use axum::extract::{Path, State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::response::{DeleteResult, InsertResult, UpdateResult};
use shared::util::parse_id;

use crate::api::extract::Json;
use crate::db::repository::{RepoError, menu};
use crate::state::AppState;

fn price_error(e: RepoError) -> AppError {
    match e {
        RepoError::Validation(msg) => AppError::with_message(ErrorCode::MenuItemInvalidPrice, msg),
        other => other.into(),
    }
}

/// GET /menu
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// GET /menu/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let id = parse_id(&id)?;
    let item = menu::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id))?;
    Ok(Json(item))
}

/// POST /menu (admin)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<InsertResult>> {
    let id = menu::create(&state.pool, payload).await.map_err(price_error)?;
    tracing::info!(menu_item_id = id, "Menu item created");
    Ok(Json(InsertResult::new(id)))
}

/// PATCH /menu/{id} (admin)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    let rows = menu::update(&state.pool, id, payload)
        .await
        .map_err(price_error)?;
    Ok(Json(UpdateResult::from_rows(rows)))
}

/// DELETE /menu/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let id = parse_id(&id)?;
    let rows = menu::delete(&state.pool, id).await?;
    tracing::info!(menu_item_id = id, deleted = rows, "Menu item deleted");
    Ok(Json(DeleteResult::new(rows)))
}
