//! Emissions reference table.
//!
//! Static mapping of canonical ingredient keys to carbon intensity
//! (kg CO2e per kg of ingredient) and category. Factors are rounded
//! lifecycle figures in the style of published farm-to-retail datasets;
//! they are deliberately coarse, the engine trades accuracy for total
//! coverage.
//!
//! The table is declared as an ordered slice, not a map: the resolution
//! chain's substring step takes the first matching entry in declaration
//! order, so more specific keys are declared before the general keys they
//! contain ("mozzarella" before "cheese", "coconut milk" before "milk").

use std::sync::LazyLock;

use crate::types::TableStats;

/// A resolved carbon intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionsFactor {
    /// kg CO2e emitted per kg of ingredient. Always strictly positive.
    pub carbon_per_kg: f64,
    pub category: &'static str,
}

/// One reference table entry: (normalized key, kg CO2e per kg, category).
///
/// Keys are in normalized form: lowercase letters and spaces, singular.
pub type TableEntry = (&'static str, f64, &'static str);

/// The reference table, in match-priority order.
pub static EMISSIONS_TABLE: &[TableEntry] = &[
    // Specific names that would otherwise be shadowed by a later general key
    ("almond milk", 0.7, "produce"),
    ("soy milk", 1.0, "produce"),
    ("oat milk", 0.9, "produce"),
    ("coconut milk", 1.6, "produce"),
    ("peanut butter", 2.5, "produce"),
    ("corn oil", 3.0, "oil"),
    ("vegetable oil", 3.1, "oil"),
    ("eggplant", 0.5, "produce"),
    // Meat
    ("beef", 27.0, "meat"),
    ("lamb", 39.2, "meat"),
    ("hamburger", 25.0, "meat"),
    ("pork", 12.1, "meat"),
    ("bacon", 13.0, "meat"),
    ("ham", 12.5, "meat"),
    ("sausage", 12.0, "meat"),
    ("pepperoni", 13.5, "meat"),
    ("chicken", 6.9, "meat"),
    ("turkey", 10.9, "meat"),
    ("duck", 11.2, "meat"),
    ("goat", 20.0, "meat"),
    // Seafood
    ("salmon", 11.9, "seafood"),
    ("tuna", 6.1, "seafood"),
    ("shrimp", 11.8, "seafood"),
    ("prawn", 11.8, "seafood"),
    ("cod", 5.4, "seafood"),
    ("crab", 8.2, "seafood"),
    ("lobster", 12.0, "seafood"),
    ("sardine", 4.0, "seafood"),
    ("anchovy", 4.2, "seafood"),
    ("fish", 5.1, "seafood"),
    // Dairy and eggs
    ("mozzarella", 11.0, "dairy"),
    ("parmesan", 14.0, "dairy"),
    ("cheddar", 13.8, "dairy"),
    ("cheese", 13.5, "dairy"),
    ("butter", 9.0, "dairy"),
    ("cream", 7.5, "dairy"),
    ("yogurt", 2.2, "dairy"),
    ("milk", 3.2, "dairy"),
    ("egg", 4.7, "dairy"),
    // Grains
    ("bread", 1.6, "grain"),
    ("pasta", 1.9, "grain"),
    ("noodle", 1.9, "grain"),
    ("rice", 2.7, "grain"),
    ("quinoa", 1.8, "grain"),
    ("flour", 1.4, "grain"),
    ("wheat", 1.4, "grain"),
    ("oat", 1.7, "grain"),
    ("barley", 1.2, "grain"),
    ("corn", 1.1, "grain"),
    // Produce
    ("tomato", 1.4, "produce"),
    ("onion", 0.4, "produce"),
    ("potato", 0.4, "produce"),
    ("carrot", 0.4, "produce"),
    ("garlic", 0.6, "produce"),
    ("mushroom", 1.3, "produce"),
    ("broccoli", 0.6, "produce"),
    ("spinach", 0.5, "produce"),
    ("lettuce", 0.5, "produce"),
    ("cabbage", 0.5, "produce"),
    ("pepper", 0.7, "produce"),
    ("avocado", 2.2, "produce"),
    ("apple", 0.4, "produce"),
    ("banana", 0.7, "produce"),
    ("orange", 0.4, "produce"),
    ("berry", 1.1, "produce"),
    ("peanut", 2.5, "produce"),
    ("chickpea", 0.8, "produce"),
    ("bean", 0.8, "produce"),
    ("pea", 0.9, "produce"),
    ("lentil", 0.9, "produce"),
    ("tofu", 2.0, "produce"),
    ("coconut", 1.0, "produce"),
    ("almond", 2.3, "produce"),
    ("seed", 1.0, "produce"),
    ("vegetable", 0.9, "produce"),
    ("fruit", 0.9, "produce"),
    ("sugar", 3.0, "produce"),
    ("chocolate", 19.0, "produce"),
    ("coffee", 16.5, "produce"),
    // Oils
    ("olive oil", 5.4, "oil"),
    ("sunflower oil", 3.5, "oil"),
    ("palm oil", 7.3, "oil"),
    ("sesame oil", 4.0, "oil"),
    ("oil", 4.0, "oil"),
];

/// Per-category carbon intensities used when only the category is known.
pub static CATEGORY_FALLBACKS: &[(&str, f64)] = &[
    ("meat", 18.0),
    ("seafood", 8.0),
    ("dairy", 6.0),
    ("grain", 1.6),
    ("produce", 0.8),
    ("oil", 4.5),
];

/// Factor assigned when nothing about the ingredient could be recognized.
pub const UNKNOWN_FACTOR: EmissionsFactor = EmissionsFactor {
    carbon_per_kg: 2.5,
    category: "unknown",
};

/// Carbon intensity for a known category, if the category has a fallback.
pub fn category_fallback(category: &str) -> Option<EmissionsFactor> {
    CATEGORY_FALLBACKS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(name, carbon_per_kg)| EmissionsFactor {
            carbon_per_kg: *carbon_per_kg,
            category: name,
        })
}

/// Summary of the reference table for the stats endpoint.
pub fn table_stats() -> &'static TableStats {
    static STATS: LazyLock<TableStats> = LazyLock::new(|| {
        let mut categories: Vec<String> = EMISSIONS_TABLE
            .iter()
            .map(|(_, _, category)| category.to_string())
            .collect();
        categories.sort();
        categories.dedup();

        TableStats {
            ingredient_count: EMISSIONS_TABLE.len(),
            categories,
        }
    });
    &STATS
}
