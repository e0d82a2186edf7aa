use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use forkprint_core::{DishEstimate, MAX_IMAGE_BYTES};
use utoipa::ToSchema;

/// Request body ceiling for the multipart upload, slightly above the image
/// cap so the core validator's size check is the one callers see.
pub const MAX_BODY_BYTES: usize = MAX_IMAGE_BYTES + 1024 * 1024;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct EstimateImageRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Estimate the carbon footprint of the dish in an uploaded photo
///
/// Accepts one multipart file field containing a JPEG, PNG, GIF, or WebP
/// image of at most 10MB. The dish name in the response comes from the
/// vision analysis.
#[utoipa::path(
    post,
    path = "/api/estimate/image",
    tag = "estimate",
    request_body(content_type = "multipart/form-data", content = EstimateImageRequest),
    responses(
        (status = 200, description = "Carbon footprint estimate for the photographed dish", body = DishEstimate),
        (status = 400, description = "Missing, oversized, or unsupported image", body = ErrorResponse)
    )
)]
pub async fn estimate_image(
    State(provider): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Get the file from multipart
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No image provided".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Multipart read error: {}", e);
            let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                format!("Image too large. Maximum size is {} bytes", MAX_IMAGE_BYTES)
            } else {
                format!("Failed to read multipart data: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
        }
    };

    // Read file data
    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                format!("Image too large. Maximum size is {} bytes", MAX_IMAGE_BYTES)
            } else {
                format!("Failed to read image data: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
        }
    };

    match forkprint_core::estimate_image(provider.as_ref(), data.to_vec()).await {
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
