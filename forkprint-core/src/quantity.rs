//! Quantity parsing.
//!
//! Converts free-text quantity expressions ("200g", "1 cup", "2 pieces",
//! "a pinch") into an estimated mass in kilograms. The parser never fails:
//! absence of any usable signal yields a plausible default serving mass.

/// Kilograms per unit for weight and volume units.
///
/// Volume units assume water-like density; that is deliberate, the upstream
/// quantity strings are too rough for per-ingredient densities to matter.
const KG_PER_LB: f64 = 0.453592;
const KG_PER_OZ: f64 = 0.0283495;
const KG_PER_CUP: f64 = 0.24;
const KG_PER_TBSP: f64 = 0.015;
const KG_PER_TSP: f64 = 0.005;

/// Fixed masses for qualitative sizes and countable pieces.
const SMALL_KG: f64 = 0.05;
const MEDIUM_KG: f64 = 0.1;
const LARGE_KG: f64 = 0.2;
const PIECE_KG: f64 = 0.1;

/// Number assumed when the text contains no usable number.
const DEFAULT_NUMBER: f64 = 0.1;

/// Scaling and bounds for the unitless serving-count interpretation.
const KG_PER_SERVING: f64 = 0.15;
const MIN_SERVING_KG: f64 = 0.05;
const MAX_SERVING_KG: f64 = 0.5;

/// How a matched unit keyword maps to a mass.
enum UnitRule {
    /// Multiply the extracted number by kilograms-per-unit.
    PerUnit(f64),
    /// Fixed mass; the extracted number is ignored.
    Fixed(f64),
}

/// Unit keywords in match-priority order.
///
/// The scan is substring-based, so ordering is load-bearing: "kg" must be
/// tested before "g" (every "kg" contains "g"), "kilogram" before "gram",
/// and the size words before "g" ("large" contains a "g"). The bare
/// gram rule is therefore last.
const UNIT_RULES: &[(&[&str], UnitRule)] = &[
    (&["kg", "kilogram"], UnitRule::PerUnit(1.0)),
    (&["lb", "pound"], UnitRule::PerUnit(KG_PER_LB)),
    (&["oz", "ounce"], UnitRule::PerUnit(KG_PER_OZ)),
    (&["cup"], UnitRule::PerUnit(KG_PER_CUP)),
    (&["tbsp", "tablespoon"], UnitRule::PerUnit(KG_PER_TBSP)),
    (&["tsp", "teaspoon"], UnitRule::PerUnit(KG_PER_TSP)),
    (&["small"], UnitRule::Fixed(SMALL_KG)),
    (&["medium"], UnitRule::Fixed(MEDIUM_KG)),
    (&["large"], UnitRule::Fixed(LARGE_KG)),
    (&["piece", "item"], UnitRule::Fixed(PIECE_KG)),
    (&["g", "gram"], UnitRule::PerUnit(0.001)),
];

/// Extract the first decimal number found anywhere in the text.
///
/// Accepts an integer run with an optional fractional part ("200", "1.5").
fn extract_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut end = start;
    let mut seen_dot = false;
    while end < bytes.len() {
        let b = bytes[end];
        if b.is_ascii_digit() {
            end += 1;
        } else if b == b'.' && !seen_dot && end + 1 < bytes.len() && bytes[end + 1].is_ascii_digit()
        {
            seen_dot = true;
            end += 1;
        } else {
            break;
        }
    }

    text[start..end].parse().ok()
}

/// Parse a free-text quantity expression into an estimated mass in kilograms.
///
/// Algorithm: lowercase; take the first decimal number in the string
/// (defaulting to 0.1 when absent or non-positive); scan [`UNIT_RULES`] in
/// order and apply the first matching rule. If no unit keyword matches, the
/// number is read as an informal serving count, scaled by a per-serving mass
/// and clamped into the plausible band [50g, 500g].
///
/// The result is always strictly positive.
pub fn parse_quantity(text: &str) -> f64 {
    let lower = text.to_lowercase();

    let number = extract_number(&lower)
        .filter(|n| *n > 0.0)
        .unwrap_or(DEFAULT_NUMBER);

    for (keywords, rule) in UNIT_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return match rule {
                UnitRule::PerUnit(kg_per_unit) => number * kg_per_unit,
                UnitRule::Fixed(kg) => *kg,
            };
        }
    }

    (number * KG_PER_SERVING).clamp(MIN_SERVING_KG, MAX_SERVING_KG)
}
