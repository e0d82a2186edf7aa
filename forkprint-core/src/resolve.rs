//! Emissions factor resolution.
//!
//! The resolution chain guarantees every ingredient an emissions factor,
//! no matter how garbled the inference output was. Each step is less
//! specific than the one before it; none of them can fail.

use crate::category::infer_category;
use crate::emissions::{category_fallback, EmissionsFactor, EMISSIONS_TABLE, UNKNOWN_FACTOR};

/// Resolve an emissions factor for a normalized ingredient key.
///
/// `category_hint` is the raw category text supplied by inference; it is
/// only consulted through the category keyword rules, so a hint outside
/// the known vocabulary cannot invent a category.
///
/// Resolution order, first match wins:
/// 1. Exact key match against the reference table.
/// 2. Substring match, first table entry in declaration order whose key
///    contains the input or is contained by it.
/// 3. Category inference on the key, then on the category hint, followed
///    by the per-category fallback constant.
/// 4. The absolute unknown-ingredient fallback.
///
/// An empty key skips the table steps entirely (an empty string is a
/// substring of every key, which would pin all unrecognizable input to
/// the first table entry).
pub fn resolve_factor(key: &str, category_hint: &str) -> EmissionsFactor {
    if !key.is_empty() {
        for (entry_key, carbon_per_kg, category) in EMISSIONS_TABLE {
            if *entry_key == key {
                return EmissionsFactor {
                    carbon_per_kg: *carbon_per_kg,
                    category,
                };
            }
        }

        for (entry_key, carbon_per_kg, category) in EMISSIONS_TABLE {
            if key.contains(entry_key) || entry_key.contains(key) {
                return EmissionsFactor {
                    carbon_per_kg: *carbon_per_kg,
                    category,
                };
            }
        }
    }

    let inferred = infer_category(key).or_else(|| infer_category(category_hint));
    if let Some(category) = inferred {
        if let Some(factor) = category_fallback(category) {
            return factor;
        }
    }

    UNKNOWN_FACTOR
}
