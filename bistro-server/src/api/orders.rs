//! Order fulfillment (admin)

use axum::extract::{Path, State};
use shared::error::AppResult;
use shared::models::{Payment, PaymentStatus};
use shared::response::UpdateResult;
use shared::util::parse_id;

use crate::api::extract::Json;
use crate::db::repository::payment;
use crate::state::AppState;

/// GET /orders - every settled payment, newest first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Payment>>> {
    Ok(Json(payment::find_all(&state.pool).await?))
}

/// PUT /orders/{id} - mark delivered
pub async fn mark_delivered(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    let rows = payment::update_status(&state.pool, id, PaymentStatus::Delivered).await?;
    tracing::info!(payment_id = id, "Order marked delivered");
    Ok(Json(UpdateResult::from_rows(rows)))
}
