//! Keyword-based category inference.
//!
//! Last-resort classifier for ingredient names (or category hints) that
//! matched nothing in the emissions reference table. Maps free text onto
//! the table's category vocabulary by substring containment.

/// Category rules in check order. The first category with a matching
/// keyword wins, so the order is part of the contract.
static CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "meat",
        &[
            "chicken", "beef", "pork", "lamb", "goat", "turkey", "duck", "bacon", "sausage",
            "pepperoni", "ham", "veal", "meat",
        ],
    ),
    (
        "seafood",
        &[
            "fish", "salmon", "tuna", "shrimp", "prawn", "crab", "lobster", "squid", "anchov",
            "sardine", "seafood",
        ],
    ),
    (
        "dairy",
        &["milk", "cheese", "butter", "cream", "yogurt", "egg", "dairy"],
    ),
    (
        "grain",
        &[
            "rice", "pasta", "noodle", "bread", "flour", "wheat", "oat", "barley", "corn",
            "quinoa", "cereal", "grain",
        ],
    ),
    (
        "produce",
        &[
            "tomato", "onion", "potato", "carrot", "pepper", "lettuce", "spinach", "broccoli",
            "cabbage", "apple", "banana", "berr", "bean", "pea", "lentil", "mushroom", "garlic",
            "herb", "salad", "fruit", "vegetable", "produce",
        ],
    ),
    ("oil", &["oil", "olive", "canola", "sunflower", "sesame", "palm"]),
];

/// Infer a category from free text, or `None` when no keyword matches.
///
/// Matching is case-insensitive substring containment against
/// [`CATEGORY_RULES`] in declaration order.
pub fn infer_category(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();

    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return Some(category);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meat_keywords() {
        assert_eq!(infer_category("chicken thigh"), Some("meat"));
        assert_eq!(infer_category("ground beef"), Some("meat"));
        assert_eq!(infer_category("meat"), Some("meat"));
    }

    #[test]
    fn test_seafood_keywords() {
        assert_eq!(infer_category("smoked salmon"), Some("seafood"));
        assert_eq!(infer_category("anchovie"), Some("seafood"));
    }

    #[test]
    fn test_dairy_keywords() {
        assert_eq!(infer_category("whole milk"), Some("dairy"));
        assert_eq!(infer_category("heavy cream"), Some("dairy"));
    }

    #[test]
    fn test_grain_and_produce() {
        assert_eq!(infer_category("basmati rice"), Some("grain"));
        assert_eq!(infer_category("cherry tomatoe"), Some("produce"));
        assert_eq!(infer_category("strawberrie"), Some("produce"));
    }

    #[test]
    fn test_category_hints_match_themselves() {
        // Hints that already name a category map straight to it
        for category in ["meat", "seafood", "dairy", "grain", "produce", "oil"] {
            assert_eq!(infer_category(category), Some(category));
        }
    }

    #[test]
    fn test_rule_order_is_first_match() {
        // "goat cheese" hits the meat rule before the dairy rule
        assert_eq!(infer_category("goat cheese"), Some("meat"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_category("Olive Oil"), Some("oil"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(infer_category("xyzfoo"), None);
        assert_eq!(infer_category(""), None);
        assert_eq!(infer_category("mystery"), None);
    }
}
