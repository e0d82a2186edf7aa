//! Inference provider abstraction.
//!
//! Trait-based seam between the estimation engine and whatever produces
//! ingredient lists from dish names or photos. Providers return the raw
//! model text; shape validation happens downstream in the response
//! contract, and every provider failure is recoverable via the canned
//! fallbacks, so callers never surface these errors to users.

mod claude;
mod config;
mod fake;

pub use claude::ClaudeProvider;
pub use config::{InferConfig, DEFAULT_MODEL};
pub use fake::FakeProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::image::ImagePayload;

/// Error type for inference calls.
#[derive(Debug, Error)]
pub enum InferError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for ingredient inference providers.
///
/// Implementations should be stateless and thread-safe. Both methods return
/// the model's raw text response; they make no promise about its shape.
#[async_trait]
pub trait InferenceProvider: Send + Sync + fmt::Debug {
    /// Infer the ingredients of a named dish.
    async fn infer_dish(&self, dish: &str) -> Result<String, InferError>;

    /// Identify a dish and its ingredients from a photo.
    async fn infer_image(&self, image: &ImagePayload) -> Result<String, InferError>;

    /// Get the provider name (e.g., "claude", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Registry of available providers.
///
/// Use environment variables to configure:
/// - FORKPRINT_PROVIDER: "claude" | "fake" (default "fake")
/// - FORKPRINT_MODEL: Model name for the Claude provider
/// - ANTHROPIC_API_KEY: API key for Claude
pub fn create_provider_from_env() -> Result<Box<dyn InferenceProvider>, InferError> {
    let provider = std::env::var("FORKPRINT_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "claude" => {
            let config = InferConfig::from_env()
                .map_err(|e| InferError::NotConfigured(e.to_string()))?;
            Ok(Box::new(ClaudeProvider::new(config)))
        }
        other => Err(InferError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
