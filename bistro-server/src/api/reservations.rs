//! Reservation API Handlers

use axum::extract::{Path, State};
use shared::error::AppResult;
use shared::models::{Reservation, ReservationCreate, ReservationStatusUpdate};
use shared::response::{InsertResult, UpdateResult};
use shared::util::parse_id;

use crate::api::extract::Json;
use crate::auth::AuthIdentity;
use crate::db::repository::reservation;
use crate::state::AppState;

/// POST /reservation - book a table for the caller
pub async fn create(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<InsertResult>> {
    identity.ensure_self(&payload.email)?;
    let id = reservation::create(&state.pool, payload).await?;
    tracing::info!(reservation_id = id, "Reservation created");

    if let Some(mailer) = state.mailer.clone() {
        match reservation::find_by_id(&state.pool, id).await {
            Ok(Some(booking)) => {
                tokio::spawn(async move {
                    if let Err(e) = mailer.send_reservation_received(&booking).await {
                        tracing::warn!(error = %e, reservation_id = booking.id, "Reservation mail failed");
                    }
                });
            }
            Ok(None) => tracing::warn!(reservation_id = id, "Reservation vanished before mail"),
            Err(e) => tracing::warn!(error = %e, reservation_id = id, "Reservation mail skipped"),
        }
    }

    Ok(Json(InsertResult::new(id)))
}

/// GET /reservation/{email} - the caller's own bookings
pub async fn list_own(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    identity.ensure_self(&email)?;
    let rows = reservation::find_by_email(&state.pool, &email).await?;
    Ok(Json(rows))
}

/// GET /manage-bookings/{email} - every booking (admin)
///
/// The path segment names the admin; all bookings are returned.
pub async fn list_all(
    State(state): State<AppState>,
    Path(_admin_email): Path<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    let rows = reservation::find_all(&state.pool).await?;
    Ok(Json(rows))
}

/// PUT /manage-bookings/{id} - change booking status (admin)
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationStatusUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    let rows = reservation::update_status(&state.pool, id, payload.status).await?;
    tracing::info!(reservation_id = id, status = ?payload.status, "Reservation status updated");
    Ok(Json(UpdateResult::from_rows(rows)))
}
