//! HTTP API
//!
//! Three route groups share one router:
//! - public: no credential
//! - authenticated: `require_auth`
//! - admin: `require_auth` then `require_admin`
//!
//! Groups are merged per path, so a path may mix public and guarded methods
//! (e.g. `GET /menu/{id}` is public, `PATCH /menu/{id}` is admin only).

pub mod carts;
pub mod extract;
pub mod health;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod reservations;
pub mod reviews;
pub mod stats;
pub mod token;
pub mod users;

use axum::routing::{delete, get, patch, post, put};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth::{require_admin, require_auth};
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/jwt", post(token::issue))
        .route("/users", post(users::create))
        .route("/menu", get(menu::list))
        .route("/menu/{id}", get(menu::get_by_id))
        .route("/carts", post(carts::create))
        .route("/carts/{id}", delete(carts::delete))
        .route("/review", post(reviews::create))
        .route("/reviews", get(reviews::list))
        .route("/create-payment-intent", post(payments::create_intent))
        .route("/payments", post(payments::settle))
        .route("/admin_stats", get(stats::admin_stats))
        .route("/order_stats", get(stats::order_stats))
        .route("/top_sales_items", get(stats::top_sales_items));

    // `{key}` is an email on GET and an id on PATCH/PUT; one name per segment
    let authenticated = Router::new()
        .route("/users/admin/{key}", get(users::check_admin))
        .route("/carts", get(carts::list))
        .route("/reservation", post(reservations::create))
        .route("/reservation/{email}", get(reservations::list_own))
        .route("/payments/{email}", get(payments::list_own))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Layers run outside-in: require_auth wraps require_admin
    let admin = Router::new()
        .route("/users", get(users::list))
        .route("/users/{id}", delete(users::delete))
        .route("/users/admin/{key}", patch(users::set_role))
        .route("/menu", post(menu::create))
        .route("/menu/{id}", patch(menu::update).delete(menu::delete))
        .route("/manage-bookings/{key}", get(reservations::list_all))
        .route("/manage-bookings/{key}", put(reservations::update_status))
        .route("/orders", get(orders::list))
        .route("/orders/{id}", put(orders::mark_delivered))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
