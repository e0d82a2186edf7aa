//! Fake inference provider for testing.
//!
//! Returns deterministic responses matched against the dish name, allowing
//! tests and keyless local runs without network access or API costs. Note
//! the stock `Default` response is `"{}"`, which fails the response
//! contract on purpose: a fake-provider deployment serves estimates from
//! the canned fallback table, deterministically.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::{InferError, InferenceProvider};
use crate::image::ImagePayload;

/// A fake inference provider for testing.
///
/// Text responses are matched by checking if the dish name contains a
/// registered substring. If no match is found, the default response is
/// returned, or an error if none is set.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of dish-name substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Response for image inference
    image_response: Option<String>,
    /// Default response if no match found
    default_response: Option<String>,
    /// When true, every call fails
    fail: bool,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            image_response: None,
            default_response: Some("{}".to_string()),
            fail: false,
        }
    }
}

#[allow(dead_code)]
impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            image_response: None,
            default_response: None,
            fail: false,
        }
    }

    /// Create a FakeProvider whose every call fails with a request error.
    pub fn failing() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            image_response: None,
            default_response: None,
            fail: true,
        }
    }

    /// Create a FakeProvider that returns a response for dish names containing a substring.
    pub fn with_response(dish_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(dish_contains, response);
        provider
    }

    /// Add a response for dish names containing a specific substring.
    pub fn add_response(&self, dish_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(dish_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Set the response returned for image inference.
    pub fn with_image_response(mut self, response: &str) -> Self {
        self.image_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl InferenceProvider for FakeProvider {
    async fn infer_dish(&self, dish: &str) -> Result<String, InferError> {
        if self.fail {
            return Err(InferError::RequestFailed(
                "FakeProvider configured to fail".to_string(),
            ));
        }

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let dish_lower = dish.to_lowercase();
        for (pattern, response) in responses.iter() {
            if dish_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(InferError::RequestFailed(format!(
                "FakeProvider: No response configured for dish: {dish}"
            ))),
        }
    }

    async fn infer_image(&self, _image: &ImagePayload) -> Result<String, InferError> {
        if self.fail {
            return Err(InferError::RequestFailed(
                "FakeProvider configured to fail".to_string(),
            ));
        }

        match self.image_response.as_ref().or(self.default_response.as_ref()) {
            Some(response) => Ok(response.clone()),
            None => Err(InferError::RequestFailed(
                "FakeProvider: No image response configured".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
