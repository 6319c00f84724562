use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::SavedRecipe;
use crate::schema::saved_recipes;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::SavedRecipeResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFavoriteRequest {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateFavoriteResponse {
    pub success: bool,
    pub message: String,
    pub recipe: SavedRecipeResponse,
}

#[utoipa::path(
    patch,
    path = "/api/recipes/saved",
    tag = "recipes",
    request_body = UpdateFavoriteRequest,
    responses(
        (status = 200, description = "Favorite flag updated", body = UpdateFavoriteResponse),
        (status = 404, description = "Recipe not found for this user", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    Json(request): Json<UpdateFavoriteRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    let updated: SavedRecipe = match diesel::update(
        saved_recipes::table
            .filter(saved_recipes::id.eq(request.recipe_id))
            .filter(saved_recipes::user_id.eq(request.user_id)),
    )
    .set(saved_recipes::favorite.eq(request.favorite))
    .returning(SavedRecipe::as_returning())
    .get_result(&mut conn)
    {
        Ok(row) => row,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update favorite: {}", e);
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
        StatusCode::OK,
        Json(UpdateFavoriteResponse {
            success: true,
            message: "Recipe updated successfully!".to_string(),
            recipe: updated.into(),
        }),
    )
        .into_response()
}
