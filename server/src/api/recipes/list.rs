use crate::api::ErrorResponse;
use crate::models::SavedRecipe;
use crate::schema::saved_recipes;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::SavedRecipeResponse;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListSavedRecipesParams {
    /// Owner of the saved recipes
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListSavedRecipesResponse {
    pub success: bool,
    pub recipes: Vec<SavedRecipeResponse>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/recipes/saved",
    tag = "recipes",
    params(ListSavedRecipesParams),
    responses(
        (status = 200, description = "User's saved recipes, newest first", body = ListSavedRecipesResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_saved_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListSavedRecipesParams>,
) -> impl IntoResponse {
    // Offline mode: an empty library rather than an error
    let Some(pool) = state.db.as_ref() else {
        return (
            StatusCode::OK,
            Json(ListSavedRecipesResponse {
                success: true,
                recipes: vec![],
                count: 0,
            }),
        )
            .into_response();
    };

    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response()
        }
    };

    let rows: Vec<SavedRecipe> = match saved_recipes::table
        .filter(saved_recipes::user_id.eq(params.user_id))
        .order(saved_recipes::created_at.desc())
        .select(SavedRecipe::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch saved recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let recipes: Vec<SavedRecipeResponse> =
        rows.into_iter().map(SavedRecipeResponse::from).collect();

    (
        StatusCode::OK,
        Json(ListSavedRecipesResponse {
            success: true,
            count: recipes.len(),
            recipes,
        }),
    )
        .into_response()
}
