use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use forkprint_core::DishEstimate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EstimateRequest {
    /// Dish name, e.g. "chicken tikka masala"
    pub dish: String,
}

/// Estimate the carbon footprint of a named dish
///
/// Ingredient inference runs against the configured provider; when it is
/// unavailable or returns garbage the estimate falls back to a canned
/// lower-confidence ingredient list, so this endpoint only fails on bad input.
#[utoipa::path(
    post,
    path = "/api/estimate",
    tag = "estimate",
    request_body(content = EstimateRequest, example = json!({"dish": "spaghetti carbonara"})),
    responses(
        (status = 200, description = "Carbon footprint estimate", body = DishEstimate),
        (status = 400, description = "Invalid dish name", body = ErrorResponse)
    )
)]
pub async fn estimate(
    State(provider): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> impl IntoResponse {
    match forkprint_core::estimate_dish(provider.as_ref(), &request.dish).await {
        Ok(estimate) => (StatusCode::OK, Json(estimate)).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
