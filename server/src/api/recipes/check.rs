use crate::api::ErrorResponse;
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

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecipeParams {
    pub user_id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecipeResponse {
    pub success: bool,
    pub is_saved: bool,
    pub recipe_id: Option<Uuid>,
}

/// Lets the client render a "saved" badge without pulling the whole list.
#[utoipa::path(
    get,
    path = "/api/recipes/check",
    tag = "recipes",
    params(CheckRecipeParams),
    responses(
        (status = 200, description = "Whether the recipe is saved", body = CheckRecipeResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn check_recipe(
    State(state): State<AppState>,
    Query(params): Query<CheckRecipeParams>,
) -> impl IntoResponse {
    let Some(pool) = &state.db else {
        // No store configured; nothing can be saved, so nothing is.
        return (
            StatusCode::OK,
            Json(CheckRecipeResponse {
                success: true,
                is_saved: false,
                recipe_id: None,
            }),
        )
            .into_response();
    };

    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response();
        }
    };

    let found: Option<Uuid> = match saved_recipes::table
        .filter(saved_recipes::user_id.eq(params.user_id))
        .filter(saved_recipes::title.eq(&params.title))
        .select(saved_recipes::id)
        .first::<Uuid>(&mut conn)
        .optional()
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to check saved recipe: {}", e);
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
        Json(CheckRecipeResponse {
            success: true,
            is_saved: found.is_some(),
            recipe_id: found,
        }),
    )
        .into_response()
}
