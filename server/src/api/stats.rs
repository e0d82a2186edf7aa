use crate::AppState;
use axum::routing::get;
use axum::{response::IntoResponse, Json, Router};
use forkprint_core::emissions::table_stats;
use forkprint_core::TableStats;
use utoipa::OpenApi;

/// Returns the router for /api/stats (absolute path, merged in main)
pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(get_stats))
}

/// Summary of the emissions reference table
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Reference table size and category list", body = TableStats)
    )
)]
pub async fn get_stats() -> impl IntoResponse {
    Json(table_stats())
}

#[derive(OpenApi)]
#[openapi(paths(get_stats))]
pub struct ApiDoc;
