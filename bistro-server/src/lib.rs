//! Bistro restaurant backend
//!
//! REST API for menu browsing, carts, reservations, user roles, payments
//! and sales analytics over SQLite.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod email;
pub mod logger;
pub mod state;
pub mod stripe;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;

use axum::Router;
use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Security event log
///
/// Emitted on the `security` target so it can be filtered separately.
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Router with browser CORS for the configured origins
pub fn create_app(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    create_router(state).layer(cors)
}
