//! Token issuing

use axum::extract::State;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::response::TokenResponse;

use crate::api::extract::Json;
use crate::auth::JwtError;
use crate::state::AppState;

/// POST /jwt - sign a token for the posted identity payload
pub async fn issue(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.jwt.generate_token(&payload).map_err(|e| match e {
        JwtError::MissingEmail => AppError::new(ErrorCode::UserEmailRequired),
        other => {
            tracing::error!(error = %other, "Token signing failed");
            AppError::internal("Token signing failed")
        }
    })?;
    Ok(Json(TokenResponse { token }))
}
