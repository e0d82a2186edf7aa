//! Carbon aggregation and rounding.
//!
//! Rounding is applied once per ingredient and once for the total: the
//! total is the rounded sum of already-rounded per-ingredient values, and
//! can differ from the rounded sum of raw products by a cent.

use crate::emissions::EmissionsFactor;
use crate::types::{RawIngredient, ResolvedIngredient};

/// Round to 2 decimal places, half up.
///
/// The epsilon nudge covers products that land a hair below a two-decimal
/// midpoint in binary floating point (6.9 * 0.15 is 1.0349999...), which
/// plain `round()` after scaling would send down instead of up.
pub fn round2(value: f64) -> f64 {
    ((value * 100.0) + 1e-9).round() / 100.0
}

/// Carbon for one ingredient: round2(factor * mass).
pub fn ingredient_carbon_kg(factor: &EmissionsFactor, mass_kg: f64) -> f64 {
    round2(factor.carbon_per_kg * mass_kg)
}

/// Build the resolved ingredient record, preserving the raw name and
/// quantity text for display.
pub fn resolve_ingredient(
    raw: &RawIngredient,
    factor: &EmissionsFactor,
    mass_kg: f64,
) -> ResolvedIngredient {
    ResolvedIngredient {
        name: raw.name.clone(),
        carbon_kg: ingredient_carbon_kg(factor, mass_kg),
        quantity: raw.estimated_quantity.clone(),
        category: factor.category.to_string(),
    }
}

/// Total dish carbon: round2 of the sum of per-ingredient rounded values.
pub fn total_carbon_kg(ingredients: &[ResolvedIngredient]) -> f64 {
    round2(ingredients.iter().map(|i| i.carbon_kg).sum())
}
