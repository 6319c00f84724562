pub mod check;
pub mod delete;
pub mod favorite;
pub mod generate;
pub mod list;
pub mod save;

use crate::models::{lines_from_json, SavedRecipe};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate::generate_recipes))
        .route(
            "/saved",
            post(save::save_recipe)
                .get(list::list_saved_recipes)
                .patch(favorite::update_favorite)
                .delete(delete::delete_saved_recipe),
        )
        .route("/check", get(check::check_recipe))
}

/// Wire form of a saved recipe, with the JSON text columns expanded back
/// into arrays.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cook_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    pub difficulty: String,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<String>,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl From<SavedRecipe> for SavedRecipeResponse {
    fn from(row: SavedRecipe) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            cook_time: row.cook_time,
            prep_time: row.prep_time,
            total_time: row.total_time,
            difficulty: row.difficulty,
            servings: row.servings,
            ingredients: lines_from_json(&row.ingredients),
            instructions: lines_from_json(&row.instructions),
            cuisine: row.cuisine,
            tags: row.tags.as_deref().map(lines_from_json),
            source: row.source,
            meal_type: row.meal_type,
            dietary: row.dietary,
            favorite: row.favorite,
            created_at: row.created_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        generate::generate_recipes,
        save::save_recipe,
        list::list_saved_recipes,
        favorite::update_favorite,
        delete::delete_saved_recipe,
        check::check_recipe,
    ),
    components(schemas(
        SavedRecipeResponse,
        generate::GenerateRecipesRequest,
        generate::Customizations,
        generate::GenerateRecipesResponse,
        save::SaveRecipeRequest,
        save::RecipePayload,
        save::SaveRecipeResponse,
        list::ListSavedRecipesResponse,
        favorite::UpdateFavoriteRequest,
        favorite::UpdateFavoriteResponse,
        delete::DeleteRecipeResponse,
        check::CheckRecipeResponse,
    ))
)]
pub struct ApiDoc;
