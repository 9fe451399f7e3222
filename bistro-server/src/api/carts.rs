//! Cart API Handlers

use axum::extract::{Path, State};
use shared::error::AppResult;
use shared::models::{CartItem, CartItemCreate, CartQuery};
use shared::response::{DeleteResult, InsertResult};
use shared::util::parse_id;

use crate::api::extract::{Json, Query};
use crate::auth::AuthIdentity;
use crate::db::repository::cart;
use crate::state::AppState;

/// POST /carts - add a line to a cart
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<InsertResult>> {
    let id = cart::create(&state.pool, payload).await?;
    Ok(Json(InsertResult::new(id)))
}

/// GET /carts?email= - the caller's own cart
///
/// Without `email` the caller's identity is used.
pub async fn list(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<Vec<CartItem>>> {
    let email = query.email.unwrap_or_else(|| identity.email.clone());
    identity.ensure_self(&email)?;
    let items = cart::find_by_email(&state.pool, &email).await?;
    Ok(Json(items))
}

/// DELETE /carts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let id = parse_id(&id)?;
    let rows = cart::delete(&state.pool, id).await?;
    Ok(Json(DeleteResult::new(rows)))
}
