//! Review API Handlers

use axum::extract::State;
use shared::error::AppResult;
use shared::models::{Review, ReviewCreate};
use shared::response::InsertResult;

use crate::api::extract::Json;
use crate::db::repository::review;
use crate::state::AppState;

/// POST /review
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<Json<InsertResult>> {
    let id = review::create(&state.pool, payload).await?;
    Ok(Json(InsertResult::new(id)))
}

/// GET /reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(review::find_all(&state.pool).await?))
}
