//! Sales analytics endpoints

use axum::extract::State;
use shared::error::{AppError, AppResult};
use shared::models::{AdminStats, CategoryStat, TopSalesItem};

use crate::api::extract::Json;
use crate::db::repository::{RepoError, analytics};
use crate::state::AppState;

fn aggregation_failed(what: &'static str) -> impl FnOnce(RepoError) -> AppError {
    move |e| {
        tracing::error!(error = %e, query = what, "Analytics aggregation failed");
        AppError::internal("Internal Server Error")
    }
}

/// GET /admin_stats
pub async fn admin_stats(State(state): State<AppState>) -> AppResult<Json<AdminStats>> {
    let stats = analytics::admin_stats(&state.pool)
        .await
        .map_err(aggregation_failed("admin_stats"))?;
    Ok(Json(stats))
}

/// GET /order_stats
pub async fn order_stats(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryStat>>> {
    let stats = analytics::order_stats(&state.pool)
        .await
        .map_err(aggregation_failed("order_stats"))?;
    Ok(Json(stats))
}

/// GET /top_sales_items
pub async fn top_sales_items(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TopSalesItem>>> {
    let items = analytics::top_sales_items(&state.pool)
        .await
        .map_err(aggregation_failed("top_sales_items"))?;
    Ok(Json(items))
}
