//! Secondary display-field decoration for generated recipes.
//!
//! Fills defaults for optional fields the model left out, never overwriting
//! anything it supplied, and assigns the synthetic per-response id. Rating
//! and review counts are fabricated placeholder values with no backing data;
//! any surface that renders them should label them as such.

use crate::types::Recipe;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const DEFAULT_PREP_TIME: &str = "10 mins";
const DEFAULT_TOTAL_TIME: &str = "30 mins";
const DEFAULT_CUISINE: &str = "International";
const DEFAULT_TAG: &str = "homemade";

/// Decorate a batch of recipes in response order.
pub fn enhance_recipes(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let base_id = unix_millis();
    recipes
        .into_iter()
        .enumerate()
        .map(|(index, recipe)| enhance_recipe(recipe, base_id, index))
        .collect()
}

fn enhance_recipe(mut recipe: Recipe, base_id: i64, index: usize) -> Recipe {
    let mut rng = rand::thread_rng();

    recipe.id = base_id + index as i64;
    recipe
        .prep_time
        .get_or_insert_with(|| DEFAULT_PREP_TIME.to_string());
    recipe
        .total_time
        .get_or_insert_with(|| DEFAULT_TOTAL_TIME.to_string());
    recipe
        .cuisine
        .get_or_insert_with(|| DEFAULT_CUISINE.to_string());
    recipe
        .tags
        .get_or_insert_with(|| vec![DEFAULT_TAG.to_string()]);
    recipe.rating = Some(rng.gen_range(4..=5));
    recipe.reviews = Some(rng.gen_range(10..=109));
    recipe
}

fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_recipe(title: &str) -> Recipe {
        Recipe {
            id: 0,
            title: title.to_string(),
            description: String::new(),
            cook_time: "25 mins".to_string(),
            difficulty: "Easy".to_string(),
            servings: 4,
            ingredients: vec!["1 cup rice".to_string()],
            instructions: vec!["Cook it.".to_string()],
            prep_time: None,
            total_time: None,
            cuisine: None,
            tags: None,
            rating: None,
            reviews: None,
        }
    }

    #[test]
    fn test_defaults_fill_absent_fields() {
        let enhanced = enhance_recipes(vec![bare_recipe("Plain Rice")]);
        let recipe = &enhanced[0];
        assert_eq!(recipe.prep_time.as_deref(), Some("10 mins"));
        assert_eq!(recipe.total_time.as_deref(), Some("30 mins"));
        assert_eq!(recipe.cuisine.as_deref(), Some("International"));
        assert_eq!(recipe.tags.as_deref(), Some(&["homemade".to_string()][..]));
    }

    #[test]
    fn test_model_supplied_fields_survive() {
        let mut recipe = bare_recipe("Biryani");
        recipe.prep_time = Some("45 mins".to_string());
        recipe.cuisine = Some("Indian".to_string());
        recipe.tags = Some(vec!["festive".to_string()]);

        let enhanced = enhance_recipes(vec![recipe]);
        assert_eq!(enhanced[0].prep_time.as_deref(), Some("45 mins"));
        assert_eq!(enhanced[0].cuisine.as_deref(), Some("Indian"));
        assert_eq!(enhanced[0].tags.as_deref(), Some(&["festive".to_string()][..]));
    }

    #[test]
    fn test_fabricated_signals_in_range() {
        for _ in 0..20 {
            let enhanced = enhance_recipes(vec![bare_recipe("Any")]);
            let rating = enhanced[0].rating.unwrap();
            let reviews = enhanced[0].reviews.unwrap();
            assert!((4..=5).contains(&rating));
            assert!((10..=109).contains(&reviews));
        }
    }

    #[test]
    fn test_ids_unique_within_response() {
        let enhanced = enhance_recipes(vec![
            bare_recipe("One"),
            bare_recipe("Two"),
            bare_recipe("Three"),
        ]);
        assert_eq!(enhanced[1].id, enhanced[0].id + 1);
        assert_eq!(enhanced[2].id, enhanced[0].id + 2);
    }
}
