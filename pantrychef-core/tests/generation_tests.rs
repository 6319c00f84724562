//! End-to-end pipeline tests using the fake provider.

use pantrychef_core::{
    generate_recipes, FakeProvider, GenerateRequest, RecipeSource,
};

fn rice_and_chicken() -> GenerateRequest {
    GenerateRequest {
        base_ingredients: vec!["rice".to_string()],
        main_ingredients: vec!["chicken".to_string()],
        meal_type: "dinner".to_string(),
        dietary: String::new(),
        ..Default::default()
    }
}

const GOOD_RESPONSE: &str = r#"{
    "recipes": [
        {
            "title": "Chicken Fried Rice",
            "description": "Weeknight classic",
            "cookTime": "20 mins",
            "difficulty": "Easy",
            "servings": 2,
            "ingredients": ["1 cup rice", "200g chicken"],
            "instructions": ["Cook the rice until tender.", "Stir-fry the chicken over high heat."]
        },
        {
            "title": "Chicken Congee",
            "description": "Comforting rice porridge",
            "cookTime": "45 mins",
            "difficulty": "Medium",
            "servings": 4,
            "ingredients": ["1/2 cup rice", "1 chicken thigh"],
            "instructions": ["Simmer rice in stock for 40 minutes, stirring occasionally.", "Shred the chicken and fold it in."]
        }
    ]
}"#;

#[tokio::test]
async fn successful_generation_reports_gpt_source() {
    let provider = FakeProvider::with_response("BASE: rice", GOOD_RESPONSE);

    let outcome = generate_recipes(&provider, &rice_and_chicken()).await;

    assert_eq!(outcome.source, RecipeSource::Gpt);
    assert_eq!(outcome.recipes.len(), 2);
    assert_eq!(outcome.recipes[0].title, "Chicken Fried Rice");
    // Enhancer ran: decorative fields are filled in
    assert!(outcome.recipes[0].rating.is_some());
    assert_eq!(outcome.recipes[0].cuisine.as_deref(), Some("International"));
    assert_eq!(outcome.recipes[1].id, outcome.recipes[0].id + 1);
}

#[tokio::test]
async fn fenced_response_still_parses() {
    let fenced = format!("```json\n{}\n```", GOOD_RESPONSE);
    let provider = FakeProvider::with_response("BASE: rice", &fenced);

    let outcome = generate_recipes(&provider, &rice_and_chicken()).await;

    assert_eq!(outcome.source, RecipeSource::Gpt);
    assert_eq!(outcome.recipes.len(), 2);
}

#[tokio::test]
async fn provider_failure_falls_back_with_selected_ingredients() {
    // No responses registered: every completion fails
    let provider = FakeProvider::new();

    let outcome = generate_recipes(&provider, &rice_and_chicken()).await;

    assert_eq!(outcome.source, RecipeSource::Fallback);
    assert_eq!(outcome.recipes.len(), 1);
    let recipe = &outcome.recipes[0];
    assert!(!recipe.title.is_empty());
    let ingredients = recipe.ingredients.join("\n");
    assert!(ingredients.contains("rice"));
    assert!(ingredients.contains("chicken"));
    assert!(!recipe.instructions.is_empty());
}

#[tokio::test]
async fn unparseable_response_falls_back() {
    let provider =
        FakeProvider::new().with_default_response("Sorry, I can't help with recipes today.");

    let outcome = generate_recipes(&provider, &rice_and_chicken()).await;

    assert_eq!(outcome.source, RecipeSource::Fallback);
    assert!(!outcome.recipes.is_empty());
}

#[tokio::test]
async fn empty_json_object_response_falls_back() {
    // The degraded no-API-key configuration answers "{}" at best
    let provider = FakeProvider::new().with_default_response("{}");

    let outcome = generate_recipes(&provider, &rice_and_chicken()).await;

    assert_eq!(outcome.source, RecipeSource::Fallback);
    assert!(!outcome.recipes.is_empty());
}

#[tokio::test]
async fn voice_mug_cake_fallback_is_themed() {
    let provider = FakeProvider::new();
    let request = GenerateRequest {
        voice_request: Some(
            "I want an eggless peanut butter chocolate mug cake".to_string(),
        ),
        ..Default::default()
    };

    let outcome = generate_recipes(&provider, &request).await;

    assert_eq!(outcome.source, RecipeSource::Fallback);
    assert_eq!(
        outcome.recipes[0].title,
        "Eggless Peanut Butter Chocolate Mug Cake"
    );
}

#[tokio::test]
async fn surprise_mode_always_yields_a_recipe() {
    let provider = FakeProvider::new();
    let request = GenerateRequest {
        surprise_mode: true,
        ..Default::default()
    };

    let outcome = generate_recipes(&provider, &request).await;

    assert_eq!(outcome.source, RecipeSource::Fallback);
    let recipe = &outcome.recipes[0];
    assert!(!recipe.title.is_empty());
    assert!(!recipe.ingredients.is_empty());
    assert!(!recipe.instructions.is_empty());
}
