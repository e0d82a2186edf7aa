//! Shared types for the estimation engine.

use serde::{Deserialize, Serialize};

/// One ingredient as reported by inference, before any validation or lookup.
///
/// All three fields are free text from the model and must be treated as
/// untrusted until they pass the response contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIngredient {
    pub name: String,
    pub estimated_quantity: String,
    pub category: String,
}

/// One ingredient after resolution against the emissions reference table.
///
/// `name` and `quantity` preserve the inference output verbatim for display;
/// `category` is the category the resolution chain settled on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResolvedIngredient {
    pub name: String,
    /// Emissions attributed to this ingredient, kg CO2e, rounded to 2 decimals.
    pub carbon_kg: f64,
    pub quantity: String,
    pub category: String,
}

/// The complete estimate for one dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DishEstimate {
    pub dish: String,
    /// Total emissions, kg CO2e, rounded to 2 decimals.
    pub estimated_carbon_kg: f64,
    pub ingredients: Vec<ResolvedIngredient>,
    /// Confidence in [0, 1]. Carried from inference, or from the fallback
    /// response when inference output was unusable.
    pub confidence: f64,
    pub methodology: String,
}

/// Structured payload expected from text inference.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceResponse {
    pub ingredients: Vec<RawIngredient>,
    pub confidence: f64,
}

/// Structured payload expected from vision inference.
///
/// Same as [`InferenceResponse`] plus the dish name the model identified
/// in the image.
#[derive(Debug, Clone, Deserialize)]
pub struct VisionInferenceResponse {
    pub dish_name: String,
    pub ingredients: Vec<RawIngredient>,
    pub confidence: f64,
}

/// Per-dish entry in a batch response.
///
/// A failed dish keeps its slot: `error` is set, carbon and confidence are
/// zero, and the ingredient list is empty. Successful dishes mirror
/// [`DishEstimate`] with `error` absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BatchItemResult {
    pub dish: String,
    pub estimated_carbon_kg: f64,
    pub ingredients: Vec<ResolvedIngredient>,
    pub confidence: f64,
    pub methodology: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItemResult {
    /// Build a success entry from a dish estimate.
    pub fn from_estimate(estimate: DishEstimate) -> Self {
        Self {
            dish: estimate.dish,
            estimated_carbon_kg: estimate.estimated_carbon_kg,
            ingredients: estimate.ingredients,
            confidence: estimate.confidence,
            methodology: estimate.methodology,
            error: None,
        }
    }

    /// Build an error-marker entry for a dish that could not be estimated.
    pub fn from_error(dish: &str, message: String) -> Self {
        Self {
            dish: dish.to_string(),
            estimated_carbon_kg: 0.0,
            ingredients: Vec::new(),
            confidence: 0.0,
            methodology: String::new(),
            error: Some(message),
        }
    }
}

/// Summary of the emissions reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TableStats {
    /// Number of ingredient entries in the table.
    pub ingredient_count: usize,
    /// Distinct categories present, sorted alphabetically.
    pub categories: Vec<String>,
}
