//! Parsing of raw model output into recipes.
//!
//! Models frequently wrap their JSON in markdown code fences despite the
//! prompt contract, so fences are stripped before parsing. Parsed recipes are
//! validated for the fields downstream code relies on; recipes missing a
//! title, ingredients, or instructions are dropped rather than propagated.

use crate::types::Recipe;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseRecipesError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Response contained no recipes")]
    NoRecipes,

    #[error("No usable recipe in response: {0}")]
    NoUsableRecipe(String),
}

/// Parse raw model text into a non-empty list of well-shaped recipes.
///
/// Accepts either `{"recipes": [...]}` or a bare recipe object. Entries that
/// fail to deserialize or fail validation are dropped individually so one
/// malformed recipe does not discard an otherwise good batch.
pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>, ParseRecipesError> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(cleaned)?;

    let entries: Vec<serde_json::Value> = match value.get("recipes") {
        Some(serde_json::Value::Array(entries)) => entries.clone(),
        Some(_) => return Err(ParseRecipesError::NoRecipes),
        None => vec![value],
    };

    if entries.is_empty() {
        return Err(ParseRecipesError::NoRecipes);
    }

    let total = entries.len();
    let usable: Vec<Recipe> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Recipe>(entry) {
            Ok(recipe) if is_usable(&recipe) => Some(recipe),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Dropping unparseable recipe entry: {}", e);
                None
            }
        })
        .collect();

    if usable.is_empty() {
        return Err(ParseRecipesError::NoUsableRecipe(format!(
            "{} recipes parsed, none had a title, ingredients, and instructions",
            total
        )));
    }

    Ok(usable)
}

/// A recipe the rest of the pipeline can work with.
fn is_usable(recipe: &Recipe) -> bool {
    !recipe.title.trim().is_empty()
        && !recipe.ingredients.is_empty()
        && !recipe.instructions.is_empty()
}

/// Strip leading/trailing markdown code-fence markers if present.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    for opener in ["```json", "```"] {
        if let Some(rest) = text.strip_prefix(opener) {
            text = rest;
            break;
        }
    }

    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = r#"{
        "recipes": [
            {
                "title": "Lemon Rice",
                "description": "Bright and simple",
                "cookTime": "20 mins",
                "difficulty": "Easy",
                "servings": 2,
                "ingredients": ["1 cup rice", "1 lemon"],
                "instructions": ["Cook the rice.", "Stir in lemon juice."]
            }
        ]
    }"#;

    #[test]
    fn test_parse_wrapped_response() {
        let recipes = parse_recipes(WRAPPED).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Lemon Rice");
        assert_eq!(recipes[0].servings, 2);
    }

    #[test]
    fn test_parse_single_recipe_object() {
        let raw = r#"{
            "title": "Toast",
            "cookTime": "5 mins",
            "ingredients": ["2 slices bread"],
            "instructions": ["Toast the bread until golden."]
        }"#;
        let recipes = parse_recipes(raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Toast");
        // Unspecified servings falls back to the default
        assert_eq!(recipes[0].servings, 4);
    }

    #[test]
    fn test_strip_json_code_fence() {
        let fenced = format!("```json\n{}\n```", WRAPPED);
        let recipes = parse_recipes(&fenced).unwrap();
        assert_eq!(recipes[0].title, "Lemon Rice");
    }

    #[test]
    fn test_strip_bare_code_fence() {
        let fenced = format!("```\n{}\n```", WRAPPED);
        let recipes = parse_recipes(&fenced).unwrap();
        assert_eq!(recipes[0].title, "Lemon Rice");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            parse_recipes("this is not json"),
            Err(ParseRecipesError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_empty_recipes_array_is_an_error() {
        assert!(matches!(
            parse_recipes(r#"{"recipes": []}"#),
            Err(ParseRecipesError::NoRecipes)
        ));
    }

    #[test]
    fn test_empty_object_is_an_error() {
        // The fake provider's default "{}" deserializes as a single recipe
        // with all fields defaulted; it must not survive validation.
        assert!(parse_recipes("{}").is_err());
    }

    #[test]
    fn test_recipes_missing_required_fields_are_dropped() {
        let raw = r#"{
            "recipes": [
                {"title": "", "ingredients": ["x"], "instructions": ["y"]},
                {"title": "Keeper", "ingredients": ["1 egg"], "instructions": ["Fry it."]},
                {"title": "No steps", "ingredients": ["1 egg"], "instructions": []},
                {"ingredients": ["no title at all"], "instructions": ["z"]}
            ]
        }"#;
        let recipes = parse_recipes(raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Keeper");
    }
}
