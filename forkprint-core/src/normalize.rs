//! Ingredient name normalization.
//!
//! Canonicalizes raw ingredient names into lookup keys for the emissions
//! reference table. Normalization is intentionally naive: it handles the
//! plural/case/punctuation noise a model actually produces, not full
//! linguistic stemming. Irregular plurals fall through to the substring
//! and category layers of the resolution chain.

/// Normalize a raw ingredient name into a lookup key.
///
/// Applied in order:
/// 1. Lowercase
/// 2. Strip a single trailing "s" (naive plural removal)
/// 3. Remove all characters outside lowercase letters and whitespace
/// 4. Trim leading/trailing whitespace
///
/// Never fails. The result may be empty when the input contained no letters;
/// callers must treat an empty key as "no match".
pub fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let singular = lower.strip_suffix('s').unwrap_or(&lower);

    let filtered: String = singular
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    filtered.trim().to_string()
}
