//! Inference response contract validation.
//!
//! Inference output is model-generated text and must never be trusted:
//! this module is the only gate between that text and the resolution
//! engine. A payload either passes every shape rule and becomes a typed
//! response, or it is rejected with a violation and the caller substitutes
//! a canned fallback. Nothing here panics on hostile input.

use serde_json::Value;
use thiserror::Error;

use crate::types::{InferenceResponse, RawIngredient, VisionInferenceResponse};

/// Why a response failed contract validation.
#[derive(Debug, Error)]
pub enum ContractViolation {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Payload has no ingredients array")]
    MissingIngredients,

    #[error("Ingredient {index} has an empty {field}")]
    EmptyIngredientField { index: usize, field: &'static str },

    #[error("Confidence missing or not a number")]
    MissingConfidence,

    #[error("Confidence {0} outside [0, 1]")]
    ConfidenceOutOfRange(f64),

    #[error("Vision payload has no dish_name")]
    MissingDishName,
}

/// Validate raw text-inference output.
///
/// Rules, all of which must hold: the payload parses as a JSON object;
/// `ingredients` is present and is an array (possibly empty); every element
/// carries non-empty `name`, `estimated_quantity`, and `category` strings;
/// `confidence` is a number in [0, 1]. Unknown extra fields are ignored.
pub fn validate_text_response(raw: &str) -> Result<InferenceResponse, ContractViolation> {
    let value = parse_object(raw)?;
    let ingredients = parse_ingredients(&value)?;
    let confidence = parse_confidence(&value)?;

    Ok(InferenceResponse {
        ingredients,
        confidence,
    })
}

/// Validate raw vision-inference output.
///
/// Same rules as [`validate_text_response`] plus a non-empty `dish_name`.
pub fn validate_vision_response(raw: &str) -> Result<VisionInferenceResponse, ContractViolation> {
    let value = parse_object(raw)?;

    let dish_name = value
        .get("dish_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ContractViolation::MissingDishName)?
        .to_string();

    let ingredients = parse_ingredients(&value)?;
    let confidence = parse_confidence(&value)?;

    Ok(VisionInferenceResponse {
        dish_name,
        ingredients,
        confidence,
    })
}

fn parse_object(raw: &str) -> Result<Value, ContractViolation> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| ContractViolation::MalformedPayload(e.to_string()))?;

    if !value.is_object() {
        return Err(ContractViolation::MalformedPayload(
            "payload is not an object".to_string(),
        ));
    }

    Ok(value)
}

fn parse_ingredients(value: &Value) -> Result<Vec<RawIngredient>, ContractViolation> {
    let items = value
        .get("ingredients")
        .and_then(Value::as_array)
        .ok_or(ContractViolation::MissingIngredients)?;

    let ingredients: Vec<RawIngredient> = serde_json::from_value(Value::Array(items.clone()))
        .map_err(|e| ContractViolation::MalformedPayload(e.to_string()))?;

    for (index, ingredient) in ingredients.iter().enumerate() {
        let fields = [
            ("name", &ingredient.name),
            ("estimated_quantity", &ingredient.estimated_quantity),
            ("category", &ingredient.category),
        ];
        for (field, text) in fields {
            if text.trim().is_empty() {
                return Err(ContractViolation::EmptyIngredientField { index, field });
            }
        }
    }

    Ok(ingredients)
}

fn parse_confidence(value: &Value) -> Result<f64, ContractViolation> {
    let confidence = value
        .get("confidence")
        .and_then(Value::as_f64)
        .ok_or(ContractViolation::MissingConfidence)?;

    if !(0.0..=1.0).contains(&confidence) {
        return Err(ContractViolation::ConfidenceOutOfRange(confidence));
    }

    Ok(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TEXT: &str = r#"{
        "ingredients": [
            {"name": "chicken breast", "estimated_quantity": "200g", "category": "meat"},
            {"name": "rice", "estimated_quantity": "150g", "category": "grain"}
        ],
        "confidence": 0.85
    }"#;

    #[test]
    fn test_valid_text_response() {
        let response = validate_text_response(VALID_TEXT).unwrap();
        assert_eq!(response.ingredients.len(), 2);
        assert_eq!(response.ingredients[0].name, "chicken breast");
        assert_eq!(response.confidence, 0.85);
    }

    #[test]
    fn test_empty_ingredients_array_is_valid() {
        let response =
            validate_text_response(r#"{"ingredients": [], "confidence": 0.2}"#).unwrap();
        assert!(response.ingredients.is_empty());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let raw = r#"{"ingredients": [], "confidence": 0.5, "reasoning": "because"}"#;
        assert!(validate_text_response(raw).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        let raw = format!("\n  {VALID_TEXT}  \n");
        assert!(validate_text_response(&raw).is_ok());
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            validate_text_response("I think the ingredients are chicken and rice"),
            Err(ContractViolation::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_non_object_payload() {
        assert!(matches!(
            validate_text_response(r#"[1, 2, 3]"#),
            Err(ContractViolation::MalformedPayload(_))
        ));
        assert!(matches!(
            validate_text_response("null"),
            Err(ContractViolation::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_missing_ingredients() {
        assert!(matches!(
            validate_text_response(r#"{"confidence": 0.9}"#),
            Err(ContractViolation::MissingIngredients)
        ));
        // Present but not an array is the same violation
        assert!(matches!(
            validate_text_response(r#"{"ingredients": "chicken", "confidence": 0.9}"#),
            Err(ContractViolation::MissingIngredients)
        ));
    }

    #[test]
    fn test_ingredient_missing_field() {
        let raw = r#"{"ingredients": [{"name": "chicken"}], "confidence": 0.9}"#;
        assert!(matches!(
            validate_text_response(raw),
            Err(ContractViolation::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_ingredient_empty_field() {
        let raw = r#"{
            "ingredients": [{"name": "chicken", "estimated_quantity": " ", "category": "meat"}],
            "confidence": 0.9
        }"#;
        assert!(matches!(
            validate_text_response(raw),
            Err(ContractViolation::EmptyIngredientField {
                index: 0,
                field: "estimated_quantity"
            })
        ));
    }

    #[test]
    fn test_confidence_violations() {
        assert!(matches!(
            validate_text_response(r#"{"ingredients": []}"#),
            Err(ContractViolation::MissingConfidence)
        ));
        assert!(matches!(
            validate_text_response(r#"{"ingredients": [], "confidence": "high"}"#),
            Err(ContractViolation::MissingConfidence)
        ));
        assert!(matches!(
            validate_text_response(r#"{"ingredients": [], "confidence": 1.5}"#),
            Err(ContractViolation::ConfidenceOutOfRange(_))
        ));
        assert!(matches!(
            validate_text_response(r#"{"ingredients": [], "confidence": -0.1}"#),
            Err(ContractViolation::ConfidenceOutOfRange(_))
        ));
    }

    #[test]
    fn test_valid_vision_response() {
        let raw = r#"{
            "dish_name": "Margherita Pizza",
            "ingredients": [
                {"name": "mozzarella", "estimated_quantity": "125g", "category": "dairy"}
            ],
            "confidence": 0.7
        }"#;
        let response = validate_vision_response(raw).unwrap();
        assert_eq!(response.dish_name, "Margherita Pizza");
        assert_eq!(response.ingredients.len(), 1);
    }

    #[test]
    fn test_vision_requires_dish_name() {
        let raw = r#"{"ingredients": [], "confidence": 0.7}"#;
        assert!(matches!(
            validate_vision_response(raw),
            Err(ContractViolation::MissingDishName)
        ));

        let raw = r#"{"dish_name": "  ", "ingredients": [], "confidence": 0.7}"#;
        assert!(matches!(
            validate_vision_response(raw),
            Err(ContractViolation::MissingDishName)
        ));
    }
}
