use crate::api::ErrorResponse;
use crate::get_conn;
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

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecipeParams {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecipeResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/recipes/saved",
    tag = "recipes",
    params(DeleteRecipeParams),
    responses(
        (status = 200, description = "Recipe deleted successfully", body = DeleteRecipeResponse),
        (status = 404, description = "Recipe not found for this user", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn delete_saved_recipe(
    State(state): State<AppState>,
    Query(params): Query<DeleteRecipeParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    // Compound filter: a user can only ever delete their own rows
    let deleted = match diesel::delete(
        saved_recipes::table
            .filter(saved_recipes::id.eq(params.recipe_id))
            .filter(saved_recipes::user_id.eq(params.user_id)),
    )
    .execute(&mut conn)
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to delete recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    if deleted == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(DeleteRecipeResponse {
            success: true,
            message: "Recipe deleted successfully!".to_string(),
        }),
    )
        .into_response()
}
