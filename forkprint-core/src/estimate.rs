//! Dish estimation orchestration.
//!
//! Per request: validate input, call the inference provider, gate its
//! output through the response contract (substituting a canned fallback on
//! any failure), resolve each ingredient, aggregate. After input
//! validation there is no error path; inference failures, contract
//! violations, and resolution misses all degrade to lower-confidence
//! well-formed estimates.

use std::sync::Arc;

use crate::aggregate::{resolve_ingredient, total_carbon_kg};
use crate::contract;
use crate::error::{validate_dish_name, InputError, MAX_BATCH_DISHES};
use crate::fallback;
use crate::image::validate_image;
use crate::infer::InferenceProvider;
use crate::normalize::normalize_name;
use crate::quantity::parse_quantity;
use crate::resolve::resolve_factor;
use crate::types::{BatchItemResult, DishEstimate, InferenceResponse, ResolvedIngredient};

/// Methodology label for the text path.
pub const TEXT_METHODOLOGY: &str = "LLM ingredient inference + carbon database lookup";

/// Methodology label for the image path.
pub const VISION_METHODOLOGY: &str = "Computer vision analysis + carbon database lookup";

/// Run the resolution chain and aggregation over a validated response.
fn resolve_response(dish: &str, response: InferenceResponse, methodology: &str) -> DishEstimate {
    let ingredients: Vec<ResolvedIngredient> = response
        .ingredients
        .iter()
        .map(|raw| {
            let key = normalize_name(&raw.name);
            let factor = resolve_factor(&key, &raw.category);
            let mass_kg = parse_quantity(&raw.estimated_quantity);
            resolve_ingredient(raw, &factor, mass_kg)
        })
        .collect();

    let estimated_carbon_kg = total_carbon_kg(&ingredients);

    DishEstimate {
        dish: dish.to_string(),
        estimated_carbon_kg,
        ingredients,
        confidence: response.confidence,
        methodology: methodology.to_string(),
    }
}

/// Estimate the carbon footprint of a named dish.
///
/// The only error is input validation; any inference or contract problem
/// substitutes the canned fallback for this dish name instead.
pub async fn estimate_dish(
    provider: &dyn InferenceProvider,
    dish: &str,
) -> Result<DishEstimate, InputError> {
    let dish = validate_dish_name(dish)?;

    let response = match provider.infer_dish(dish).await {
        Ok(raw) => match contract::validate_text_response(&raw) {
            Ok(response) => {
                tracing::debug!(dish, ingredients = response.ingredients.len(), "inference accepted");
                response
            }
            Err(violation) => {
                tracing::warn!(dish, %violation, "inference response rejected, using fallback");
                fallback::text_fallback(dish)
            }
        },
        Err(e) => {
            tracing::warn!(dish, error = %e, "inference call failed, using fallback");
            fallback::text_fallback(dish)
        }
    };

    Ok(resolve_response(dish, response, TEXT_METHODOLOGY))
}

/// Estimate the carbon footprint of the dish in a photo.
///
/// The dish name comes from the vision response, or "Unknown Dish" when
/// the response was unusable and the vision fallback was substituted.
pub async fn estimate_image(
    provider: &dyn InferenceProvider,
    data: Vec<u8>,
) -> Result<DishEstimate, InputError> {
    let payload = validate_image(data)?;

    let response = match provider.infer_image(&payload).await {
        Ok(raw) => match contract::validate_vision_response(&raw) {
            Ok(response) => response,
            Err(violation) => {
                tracing::warn!(%violation, "vision response rejected, using fallback");
                fallback::vision_fallback()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "vision inference call failed, using fallback");
            fallback::vision_fallback()
        }
    };

    let inference = InferenceResponse {
        ingredients: response.ingredients,
        confidence: response.confidence,
    };

    Ok(resolve_response(&response.dish_name, inference, VISION_METHODOLOGY))
}

/// Estimate a batch of dishes, one concurrent inference call per dish.
///
/// The output preserves input order and always has one entry per dish. A
/// dish that fails validation, or whose estimation task dies, occupies its
/// slot as an error marker; the other dishes are unaffected.
pub async fn estimate_batch(
    provider: Arc<dyn InferenceProvider>,
    dishes: Vec<String>,
) -> Result<Vec<BatchItemResult>, InputError> {
    if dishes.is_empty() {
        return Err(InputError::EmptyBatch);
    }
    if dishes.len() > MAX_BATCH_DISHES {
        return Err(InputError::BatchTooLarge(dishes.len()));
    }

    let handles: Vec<_> = dishes
        .iter()
        .map(|dish| {
            let provider = Arc::clone(&provider);
            let dish = dish.clone();
            tokio::spawn(async move { estimate_dish(provider.as_ref(), &dish).await })
        })
        .collect();

    let mut results = Vec::with_capacity(dishes.len());
    for (dish, handle) in dishes.iter().zip(handles) {
        let item = match handle.await {
            Ok(Ok(estimate)) => BatchItemResult::from_estimate(estimate),
            Ok(Err(e)) => {
                tracing::warn!(dish = %dish, error = %e, "batch item rejected");
                BatchItemResult::from_error(dish, e.to_string())
            }
            Err(e) => {
                tracing::error!(dish = %dish, error = %e, "batch estimation task failed");
                BatchItemResult::from_error(dish, "estimation task failed".to_string())
            }
        };
        results.push(item);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::FakeProvider;

    const CURRY_RESPONSE: &str = r#"{
        "ingredients": [
            {"name": "chicken", "estimated_quantity": "150g", "category": "meat"},
            {"name": "rice", "estimated_quantity": "200g", "category": "grain"}
        ],
        "confidence": 0.85
    }"#;

    #[tokio::test]
    async fn test_estimate_dish_direct_path() {
        let provider = FakeProvider::with_response("curry", CURRY_RESPONSE);
        let estimate = estimate_dish(&provider, "chicken curry").await.unwrap();

        assert_eq!(estimate.dish, "chicken curry");
        assert_eq!(estimate.confidence, 0.85);
        assert_eq!(estimate.methodology, TEXT_METHODOLOGY);
        assert_eq!(estimate.ingredients.len(), 2);
        // chicken: 6.9 * 0.15 = 1.04, rice: 2.7 * 0.2 = 0.54
        assert_eq!(estimate.ingredients[0].carbon_kg, 1.04);
        assert_eq!(estimate.ingredients[1].carbon_kg, 0.54);
        assert_eq!(estimate.estimated_carbon_kg, 1.58);
    }

    #[tokio::test]
    async fn test_estimate_dish_trims_name() {
        let provider = FakeProvider::with_response("curry", CURRY_RESPONSE);
        let estimate = estimate_dish(&provider, "  chicken curry  ").await.unwrap();
        assert_eq!(estimate.dish, "chicken curry");
    }

    #[tokio::test]
    async fn test_inference_failure_uses_dish_pattern_fallback() {
        let provider = FakeProvider::failing();
        let estimate = estimate_dish(&provider, "Pizza Margherita").await.unwrap();

        assert_eq!(estimate.confidence, 0.75);
        assert!(!estimate.ingredients.is_empty());
        assert!(estimate.estimated_carbon_kg > 0.0);
    }

    #[tokio::test]
    async fn test_contract_violation_uses_fallback() {
        let provider = FakeProvider::with_response("pizza", "not json at all");
        let estimate = estimate_dish(&provider, "pizza").await.unwrap();
        assert_eq!(estimate.confidence, 0.75);
    }

    #[tokio::test]
    async fn test_unmatched_dish_gets_generic_fallback() {
        let provider = FakeProvider::failing();
        let estimate = estimate_dish(&provider, "Unicorn tears with dragon scales")
            .await
            .unwrap();

        assert_eq!(estimate.confidence, 0.5);
        assert_eq!(estimate.ingredients.len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_dish_name_is_an_error() {
        let provider = FakeProvider::default();
        assert!(estimate_dish(&provider, "   ").await.is_err());
        assert!(estimate_dish(&provider, &"x".repeat(500)).await.is_err());
    }

    #[tokio::test]
    async fn test_ingredient_order_preserved() {
        let response = r#"{
            "ingredients": [
                {"name": "zucchini", "estimated_quantity": "100g", "category": "produce"},
                {"name": "apple", "estimated_quantity": "100g", "category": "produce"},
                {"name": "milk", "estimated_quantity": "100g", "category": "dairy"}
            ],
            "confidence": 0.9
        }"#;
        let provider = FakeProvider::with_response("bowl", response);
        let estimate = estimate_dish(&provider, "weird bowl").await.unwrap();

        let names: Vec<_> = estimate.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["zucchini", "apple", "milk"]);
    }
}
