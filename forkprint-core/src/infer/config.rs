//! Inference configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default Claude model.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Claude provider configuration.
#[derive(Debug, Clone)]
pub struct InferConfig {
    /// API key for the Anthropic API.
    pub api_key: String,
    /// Model name.
    pub model: String,
}

impl InferConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `ANTHROPIC_API_KEY`: API key for Claude
    ///
    /// Optional:
    /// - `FORKPRINT_MODEL`: Model name (default: "claude-3-5-sonnet-20241022")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()))?;

        let model = env::var("FORKPRINT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}
