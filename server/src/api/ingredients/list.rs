use crate::api::ErrorResponse;
use crate::models::CustomIngredient;
use crate::schema::custom_ingredients;
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
pub struct ListIngredientsParams {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomIngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub validated: bool,
}

impl From<CustomIngredient> for CustomIngredientResponse {
    fn from(row: CustomIngredient) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            validated: row.validated,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub success: bool,
    pub ingredients: Vec<CustomIngredientResponse>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/ingredients/custom",
    tag = "ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "The user's custom ingredients, newest first", body = ListIngredientsResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_custom_ingredients(
    State(state): State<AppState>,
    Query(params): Query<ListIngredientsParams>,
) -> impl IntoResponse {
    let Some(pool) = &state.db else {
        // No store configured: the user simply has no custom ingredients.
        return (
            StatusCode::OK,
            Json(ListIngredientsResponse {
                success: true,
                ingredients: vec![],
                count: 0,
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

    let rows: Vec<CustomIngredient> = match custom_ingredients::table
        .filter(custom_ingredients::user_id.eq(params.user_id))
        .order(custom_ingredients::created_at.desc())
        .select(CustomIngredient::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to list custom ingredients: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let ingredients: Vec<CustomIngredientResponse> =
        rows.into_iter().map(CustomIngredientResponse::from).collect();
    let count = ingredients.len();

    (
        StatusCode::OK,
        Json(ListIngredientsResponse {
            success: true,
            ingredients,
            count,
        }),
    )
        .into_response()
}
