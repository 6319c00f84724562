//! Heuristic ingredient-name validation.
//!
//! A denylist/allowlist heuristic, not a classifier: nonsense patterns are
//! rejected, catalog members are validated, and unknown but plausible names
//! are accepted as unverified custom ingredients. Catalog data is loaded from
//! `data/ingredients.json` at compile time.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The raw JSON structure for the ingredients data file.
#[derive(Deserialize)]
struct IngredientsData {
    common: Vec<String>,
    base: Vec<String>,
}

static CATALOG: LazyLock<IngredientsData> = LazyLock::new(|| {
    let json = include_str!("../data/ingredients.json");
    serde_json::from_str(json).expect("Failed to parse ingredients.json")
});

/// Ingredient category used for grouping in the selection UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Base,
    Main,
    Other,
    Unknown,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Base => "base",
            IngredientCategory::Main => "main",
            IngredientCategory::Other => "other",
            IngredientCategory::Unknown => "unknown",
        }
    }
}

/// The outcome of validating one ingredient name.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Display-cased name for valid ingredients, the input verbatim otherwise.
    pub name: String,
    pub category: IngredientCategory,
    /// Whether the name matched the catalog (as opposed to being accepted
    /// as an unverified custom ingredient).
    pub verified: bool,
    pub reason: &'static str,
}

/// Validate an ingredient name.
pub fn validate_ingredient(ingredient: &str) -> ValidationResult {
    let normalized = ingredient.to_lowercase().trim().to_string();

    if normalized.len() < 2 {
        return rejected(ingredient, "Ingredient name too short");
    }

    if is_nonsense(&normalized) {
        return rejected(ingredient, "Not a valid ingredient name");
    }

    // Bidirectional substring containment against the catalog
    let is_common = CATALOG
        .common
        .iter()
        .any(|common| normalized.contains(common.as_str()) || common.contains(&normalized));

    if is_common {
        return ValidationResult {
            valid: true,
            name: display_case(&normalized),
            category: categorize(&normalized),
            verified: true,
            reason: "Validated from common ingredients catalog",
        };
    }

    // Unknown but plausible: letters and spaces only, 3+ characters
    if normalized.len() >= 3 && normalized.chars().all(|c| c.is_ascii_lowercase() || c == ' ') {
        return ValidationResult {
            valid: true,
            name: display_case(&normalized),
            category: IngredientCategory::Main,
            verified: false,
            reason: "Accepted as custom ingredient",
        };
    }

    rejected(ingredient, "Not a valid cooking ingredient")
}

/// Category for a catalog-matched name: base starches vs everything else.
pub fn categorize(normalized: &str) -> IngredientCategory {
    let is_base = CATALOG
        .base
        .iter()
        .any(|base| normalized.contains(base.as_str()) || base.contains(normalized));
    if is_base {
        IngredientCategory::Base
    } else {
        IngredientCategory::Main
    }
}

fn rejected(input: &str, reason: &'static str) -> ValidationResult {
    ValidationResult {
        valid: false,
        name: input.to_string(),
        category: IngredientCategory::Unknown,
        verified: false,
        reason,
    }
}

fn is_nonsense(normalized: &str) -> bool {
    // 4+ repeats of a single character: "aaaa", "zzzzz"
    let mut chars = normalized.chars();
    if let Some(first) = chars.next() {
        if normalized.len() >= 4 && chars.all(|c| c == first) {
            return true;
        }
    }

    // Only symbols/digits, no letters or spaces at all
    if !normalized
        .chars()
        .any(|c| c.is_ascii_lowercase() || c == ' ')
    {
        return true;
    }

    normalized.contains("xxx") || normalized.contains("zzz")
}

/// Capitalize the first letter, lowercase the rest.
fn display_case(normalized: &str) -> String {
    let mut chars = normalized.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_one_always_rejected() {
        let result = validate_ingredient("a");
        assert!(!result.valid);
        assert_eq!(result.reason, "Ingredient name too short");
    }

    #[test]
    fn test_catalog_hit_is_verified() {
        let result = validate_ingredient("  Tomato ");
        assert!(result.valid);
        assert!(result.verified);
        assert_eq!(result.name, "Tomato");
        assert_eq!(result.category, IngredientCategory::Main);
    }

    #[test]
    fn test_base_ingredients_categorized_base() {
        for name in ["rice", "basmati rice", "flour", "noodles"] {
            let result = validate_ingredient(name);
            assert!(result.valid, "{} should be valid", name);
            assert_eq!(
                result.category,
                IngredientCategory::Base,
                "{} should be base",
                name
            );
        }
        assert_eq!(
            validate_ingredient("chicken").category,
            IngredientCategory::Main
        );
    }

    #[test]
    fn test_substring_containment_is_bidirectional() {
        // Input contains a catalog entry
        assert!(validate_ingredient("cherry tomato").verified);
        // Catalog entry contains the input
        assert!(validate_ingredient("tomat").verified);
    }

    #[test]
    fn test_unknown_alphabetic_accepted_as_custom() {
        let result = validate_ingredient("fenugreek");
        assert!(result.valid);
        assert!(!result.verified);
        assert_eq!(result.category, IngredientCategory::Main);
        assert_eq!(result.name, "Fenugreek");
    }

    #[test]
    fn test_nonsense_patterns_rejected() {
        for name in ["aaaa", "bbbbbb", "1234", "!!!", "xxxfood", "zzz stuff"] {
            assert!(!validate_ingredient(name).valid, "{} should be rejected", name);
        }
    }

    #[test]
    fn test_mixed_alphanumeric_rejected() {
        assert!(!validate_ingredient("abc123").valid);
    }
}
