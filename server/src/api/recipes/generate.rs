use crate::history;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pantrychef_core::{GenerateRequest, Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    #[serde(default)]
    pub base_ingredients: Vec<String>,
    #[serde(default)]
    pub main_ingredients: Vec<String>,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub dietary: String,
    #[serde(default)]
    pub customizations: Customizations,
    #[serde(default)]
    pub surprise_mode: bool,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    #[serde(default)]
    pub voice_request: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub success: bool,
    pub recipes: Vec<Recipe>,
    pub message: String,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, description = "Recipes generated (from the model or the fallback)", body = GenerateRecipesResponse)
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipesRequest>,
) -> impl IntoResponse {
    let generate_request = GenerateRequest {
        base_ingredients: request.base_ingredients,
        main_ingredients: request.main_ingredients,
        meal_type: request.meal_type,
        dietary: request.dietary,
        voice_request: request.customizations.voice_request.clone(),
        surprise_mode: request.surprise_mode,
    };

    let outcome = pantrychef_core::generate_recipes(state.llm.as_ref(), &generate_request).await;

    tracing::info!(
        source = outcome.source.as_str(),
        count = outcome.recipes.len(),
        surprise = generate_request.surprise_mode,
        "Recipes generated"
    );

    // Best-effort audit write; never blocks or fails the response
    history::spawn_record(
        &state,
        &generate_request,
        request.user_id,
        outcome.recipes.len(),
        outcome.source,
    );

    let message = if generate_request.surprise_mode {
        "Surprise recipes generated!".to_string()
    } else {
        "Recipes generated successfully!".to_string()
    };

    (
        StatusCode::OK,
        Json(GenerateRecipesResponse {
            success: true,
            count: outcome.recipes.len(),
            recipes: outcome.recipes,
            message,
        }),
    )
        .into_response()
}
