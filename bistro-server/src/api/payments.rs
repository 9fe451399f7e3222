//! Payment API Handlers
//!
//! Two steps: the client first asks for a payment intent, confirms the charge
//! with the provider, then posts the settled payment here.

use axum::extract::{Path, State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Payment, PaymentCreate, PaymentIntentRequest, PaymentIntentResponse, SettlementResult};
use shared::response::{DeleteResult, InsertResult};

use crate::api::extract::Json;
use crate::auth::AuthIdentity;
use crate::db::repository::payment;
use crate::state::AppState;
use crate::stripe::{CURRENCY, to_minor_units};

/// POST /create-payment-intent
pub async fn create_intent(
    State(state): State<AppState>,
    Json(payload): Json<PaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let amount = to_minor_units(payload.price).ok_or_else(|| {
        AppError::new(ErrorCode::PaymentInvalidAmount).with_detail("price", payload.price)
    })?;

    let intent = state
        .payments
        .create_payment_intent(amount, CURRENCY)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, amount, "Payment intent creation failed");
            AppError::new(ErrorCode::PaymentProviderError)
        })?;

    tracing::info!(intent_id = %intent.id, amount, "Payment intent created");
    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// GET /payments/{email} - the caller's own payments
pub async fn list_own(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    identity.ensure_self(&email)?;
    Ok(Json(payment::find_by_email(&state.pool, &email).await?))
}

/// POST /payments - record a settled payment and clear its cart lines
pub async fn settle(
    State(state): State<AppState>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<SettlementResult>> {
    let settlement = payment::settle(&state.pool, payload).await?;

    if settlement.inserted {
        tracing::info!(
            payment_id = settlement.payment_id,
            carts_deleted = settlement.carts_deleted,
            "Payment settled"
        );
        if let Some(mailer) = state.mailer.clone() {
            match payment::find_by_id(&state.pool, settlement.payment_id).await {
                Ok(Some(stored)) => {
                    tokio::spawn(async move {
                        if let Err(e) = mailer.send_payment_confirmation(&stored).await {
                            tracing::warn!(error = %e, payment_id = stored.id, "Payment mail failed");
                        }
                    });
                }
                Ok(None) => tracing::warn!(
                    payment_id = settlement.payment_id,
                    "Payment vanished before mail"
                ),
                Err(e) => tracing::warn!(
                    error = %e,
                    payment_id = settlement.payment_id,
                    "Payment mail skipped"
                ),
            }
        }
    } else {
        tracing::info!(
            payment_id = settlement.payment_id,
            "Settlement replayed for known transaction"
        );
    }

    Ok(Json(SettlementResult {
        payment_result: InsertResult::new(settlement.payment_id),
        delete_result: DeleteResult::new(settlement.carts_deleted),
    }))
}
