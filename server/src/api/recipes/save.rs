use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::{lines_to_json, NewSavedRecipe};
use crate::schema::saved_recipes;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    pub user_id: Uuid,
    pub recipe: RecipePayload,
}

/// Recipe fields as submitted by the client for saving.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default = "default_servings")]
    pub servings: i32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// "gpt" | "fallback" | "user_saved"
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub dietary: Option<String>,
}

fn default_servings() -> i32 {
    4
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeResponse {
    pub success: bool,
    pub message: String,
    pub recipe_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/recipes/saved",
    tag = "recipes",
    request_body = SaveRecipeRequest,
    responses(
        (status = 201, description = "Recipe saved successfully", body = SaveRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Recipe already saved", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    Json(request): Json<SaveRecipeRequest>,
) -> impl IntoResponse {
    let recipe = &request.recipe;

    if recipe.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if recipe.ingredients.is_empty() || recipe.instructions.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Ingredients and instructions are required".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state);

    let ingredients = lines_to_json(&recipe.ingredients);
    let instructions = lines_to_json(&recipe.instructions);
    let tags = recipe.tags.as_deref().map(lines_to_json);

    let new_recipe = NewSavedRecipe {
        user_id: request.user_id,
        title: recipe.title.trim(),
        description: &recipe.description,
        cook_time: &recipe.cook_time,
        prep_time: recipe.prep_time.as_deref(),
        total_time: recipe.total_time.as_deref(),
        difficulty: &recipe.difficulty,
        servings: recipe.servings.max(1),
        ingredients: &ingredients,
        instructions: &instructions,
        cuisine: recipe.cuisine.as_deref(),
        tags: tags.as_deref(),
        source: recipe.source.as_deref().unwrap_or("user_saved"),
        meal_type: recipe.meal_type.as_deref(),
        dietary: recipe.dietary.as_deref(),
    };

    let recipe_id: Uuid = match diesel::insert_into(saved_recipes::table)
        .values(&new_recipe)
        .returning(saved_recipes::id)
        .get_result(&mut conn)
    {
        Ok(id) => id,
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: "Recipe already saved!".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to save recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(SaveRecipeResponse {
            success: true,
            message: "Recipe saved successfully!".to_string(),
            recipe_id,
        }),
    )
        .into_response()
}
