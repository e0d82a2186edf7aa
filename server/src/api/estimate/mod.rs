pub mod batch;
pub mod image;
pub mod text;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/estimate endpoints (mounted at /api/estimate)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(text::estimate))
        .route("/batch", post(batch::estimate_batch))
        .route(
            "/image",
            post(image::estimate_image).layer(DefaultBodyLimit::max(image::MAX_BODY_BYTES)),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(text::estimate, image::estimate_image, batch::estimate_batch),
    components(schemas(
        text::EstimateRequest,
        image::EstimateImageRequest,
        batch::BatchEstimateRequest,
        batch::BatchEstimateResponse,
    ))
)]
pub struct ApiDoc;
