//! Health check endpoints

use crate::api::extract::Json;

/// GET / - liveness banner
pub async fn root() -> &'static str {
    "Bistro is sitting"
}

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "bistro-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
