use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use forkprint_core::BatchItemResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BatchEstimateRequest {
    /// Dish names to estimate, at most 20 per request
    pub dishes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatchEstimateResponse {
    pub results: Vec<BatchItemResult>,
}

/// Estimate the carbon footprint of several dishes in one request
///
/// Dishes are estimated concurrently. The results list preserves request
/// order and always has one entry per dish; a dish that could not be
/// estimated carries an error field instead of aborting the batch.
#[utoipa::path(
    post,
    path = "/api/estimate/batch",
    tag = "estimate",
    request_body(content = BatchEstimateRequest, example = json!({"dishes": ["pad thai", "greek salad"]})),
    responses(
        (status = 200, description = "One result per requested dish, in order", body = BatchEstimateResponse),
        (status = 400, description = "Empty batch or too many dishes", body = ErrorResponse)
    )
)]
pub async fn estimate_batch(
    State(provider): State<AppState>,
    Json(request): Json<BatchEstimateRequest>,
) -> impl IntoResponse {
    match forkprint_core::estimate_batch(provider, request.dishes).await {
        Ok(results) => (StatusCode::OK, Json(BatchEstimateResponse { results })).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
