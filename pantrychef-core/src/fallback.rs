//! Hand-authored fallback recipes.
//!
//! Served whenever the provider call fails or its output cannot be parsed, so
//! callers always receive at least one recipe. Selection order: a themed
//! mug-cake for the matching voice phrase, then a quick recipe built from the
//! user's selected ingredients, then a default pasta.

use crate::types::{GenerateRequest, Recipe};

/// Build fallback recipes for a request. Always returns at least one recipe.
pub fn fallback_recipes(request: &GenerateRequest) -> Vec<Recipe> {
    if let Some(voice) = request.voice_request.as_deref() {
        let voice = voice.to_lowercase();
        if voice.contains("mug cake")
            && voice.contains("peanut butter")
            && voice.contains("chocolate")
        {
            return vec![mug_cake()];
        }
    }

    let all = request.all_ingredients();
    if !all.is_empty() {
        return vec![quick_ingredients_recipe(request, &all)];
    }

    vec![pasta_aglio_e_olio()]
}

/// A quick recipe that references every selected ingredient.
fn quick_ingredients_recipe(request: &GenerateRequest, all: &[&str]) -> Recipe {
    let joined = all.join(", ");

    let mut ingredients: Vec<String> = request
        .base_ingredients
        .iter()
        .map(|ing| format!("1 cup {}", ing))
        .collect();
    ingredients.extend(
        request
            .main_ingredients
            .iter()
            .map(|ing| format!("1/2 cup {}", ing)),
    );
    ingredients.push("Salt and pepper to taste".to_string());

    Recipe {
        id: 0,
        title: format!("Quick {} Recipe", joined),
        description: format!("A simple recipe using {}", joined),
        cook_time: "20 mins".to_string(),
        difficulty: "Easy".to_string(),
        servings: 2,
        ingredients,
        instructions: vec![
            "Combine all ingredients in a bowl or blender.".to_string(),
            "Mix or blend until well combined.".to_string(),
            "Serve immediately and enjoy!".to_string(),
        ],
        prep_time: Some("5 mins".to_string()),
        total_time: Some("25 mins".to_string()),
        cuisine: None,
        tags: Some(vec!["quick".to_string()]),
        rating: None,
        reviews: None,
    }
}

fn mug_cake() -> Recipe {
    Recipe {
        id: 0,
        title: "Eggless Peanut Butter Chocolate Mug Cake".to_string(),
        description: "A quick and delicious single-serving mug cake ready in minutes".to_string(),
        cook_time: "2 mins".to_string(),
        difficulty: "Easy".to_string(),
        servings: 1,
        ingredients: vec![
            "3 tbsp all-purpose flour".to_string(),
            "2 tbsp cocoa powder".to_string(),
            "2 tbsp sugar".to_string(),
            "1/4 tsp baking powder".to_string(),
            "2 tbsp peanut butter".to_string(),
            "3 tbsp milk".to_string(),
            "1 tbsp chocolate chips".to_string(),
        ],
        instructions: vec![
            "In a microwave-safe mug (at least 12 oz capacity), whisk together the all-purpose flour, cocoa powder, sugar, and baking powder until well combined with no lumps.".to_string(),
            "Add the peanut butter to the dry mixture and pour in the milk. Using a fork or small whisk, stir vigorously until the batter is completely smooth and no streaks of peanut butter remain. The mixture should be thick but pourable.".to_string(),
            "Gently fold in the chocolate chips, distributing them evenly throughout the batter. Tap the mug lightly on the counter to settle the ingredients.".to_string(),
            "Microwave on high power for 90 seconds. The cake should rise significantly and spring back lightly when touched in the center. If still wet in the center, microwave for an additional 15-20 seconds.".to_string(),
            "Remove carefully (the mug will be very hot) and let cool for 1-2 minutes before enjoying. The cake will deflate slightly as it cools, which is normal.".to_string(),
        ],
        prep_time: Some("2 mins".to_string()),
        total_time: Some("4 mins".to_string()),
        cuisine: Some("American".to_string()),
        tags: Some(vec![
            "quick".to_string(),
            "dessert".to_string(),
            "microwave".to_string(),
            "eggless".to_string(),
        ]),
        rating: None,
        reviews: None,
    }
}

fn pasta_aglio_e_olio() -> Recipe {
    Recipe {
        id: 0,
        title: "Simple Pasta Aglio e Olio".to_string(),
        description: "Classic Italian pasta with garlic and olive oil".to_string(),
        cook_time: "15 mins".to_string(),
        difficulty: "Easy".to_string(),
        servings: 2,
        ingredients: vec![
            "200g spaghetti".to_string(),
            "4 cloves garlic, sliced".to_string(),
            "3 tbsp olive oil".to_string(),
            "Red pepper flakes".to_string(),
            "Parsley".to_string(),
            "Salt and pepper".to_string(),
        ],
        instructions: vec![
            "Bring a large pot of salted water to a rolling boil. Add the spaghetti and cook according to package directions until al dente, usually 8-10 minutes. Reserve 1/2 cup of pasta cooking water before draining.".to_string(),
            "While the pasta cooks, heat the olive oil in a large skillet over medium-low heat. Add the sliced garlic and cook slowly, stirring frequently, for 2-3 minutes until fragrant and just beginning to turn golden. Do not let it brown or it will become bitter.".to_string(),
            "Add a pinch of red pepper flakes to the garlic oil and cook for another 30 seconds. Remove from heat temporarily if the pasta isn't ready yet.".to_string(),
            "Drain the pasta and immediately add it to the skillet with the garlic oil. Toss vigorously over medium heat for 1-2 minutes, adding a splash of the reserved pasta water if needed to help coat the noodles.".to_string(),
            "Remove from heat and add freshly chopped parsley, salt, and freshly ground black pepper to taste. Toss once more and serve immediately in warmed bowls.".to_string(),
        ],
        prep_time: Some("5 mins".to_string()),
        total_time: Some("20 mins".to_string()),
        cuisine: Some("Italian".to_string()),
        tags: Some(vec!["quick".to_string(), "vegetarian".to_string()]),
        rating: None,
        reviews: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_fallback_references_selection() {
        let request = GenerateRequest {
            base_ingredients: vec!["rice".to_string()],
            main_ingredients: vec!["chicken".to_string()],
            meal_type: "dinner".to_string(),
            ..Default::default()
        };
        let recipes = fallback_recipes(&request);
        assert_eq!(recipes.len(), 1);
        let ingredients = recipes[0].ingredients.join("\n");
        assert!(ingredients.contains("rice"));
        assert!(ingredients.contains("chicken"));
        assert!(recipes[0].title.contains("rice, chicken"));
    }

    #[test]
    fn test_voice_mug_cake_special_case() {
        let request = GenerateRequest {
            voice_request: Some(
                "Make me an eggless peanut butter chocolate mug cake".to_string(),
            ),
            ..Default::default()
        };
        let recipes = fallback_recipes(&request);
        assert_eq!(recipes[0].title, "Eggless Peanut Butter Chocolate Mug Cake");
        assert_eq!(recipes[0].servings, 1);
    }

    #[test]
    fn test_other_voice_phrases_get_default_path() {
        let request = GenerateRequest {
            voice_request: Some("something with noodles".to_string()),
            ..Default::default()
        };
        let recipes = fallback_recipes(&request);
        assert_eq!(recipes[0].title, "Simple Pasta Aglio e Olio");
    }

    #[test]
    fn test_empty_request_gets_default_recipe() {
        let recipes = fallback_recipes(&GenerateRequest::default());
        assert_eq!(recipes.len(), 1);
        assert!(!recipes[0].title.is_empty());
        assert!(!recipes[0].ingredients.is_empty());
        assert!(!recipes[0].instructions.is_empty());
    }
}
