use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::NewCustomIngredient;
use crate::schema::custom_ingredients;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use pantrychef_core::validator::validate_ingredient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveIngredientRequest {
    pub user_id: Uuid,
    pub name: String,
    /// Category override; when absent the name is categorized heuristically.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveIngredientResponse {
    pub success: bool,
    pub message: String,
    pub ingredient: IngredientSummary,
}

#[utoipa::path(
    post,
    path = "/api/ingredients/custom",
    tag = "ingredients",
    request_body = SaveIngredientRequest,
    responses(
        (status = 201, description = "Ingredient saved", body = SaveIngredientResponse),
        (status = 400, description = "Name rejected by validation", body = ErrorResponse),
        (status = 409, description = "Ingredient already saved", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse),
        (status = 503, description = "Persistent storage not configured", body = ErrorResponse)
    )
)]
pub async fn save_custom_ingredient(
    State(state): State<AppState>,
    Json(request): Json<SaveIngredientRequest>,
) -> impl IntoResponse {
    // Names are stored lowercase so the per-user uniqueness constraint is
    // case-insensitive in practice.
    let name = request.name.to_lowercase().trim().to_string();

    let validation = validate_ingredient(&name);
    if !validation.valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation.reason.to_string(),
            }),
        )
            .into_response();
    }

    let category = request
        .category
        .unwrap_or_else(|| validation.category.as_str().to_string());

    let mut conn = get_conn!(state);

    let new_ingredient = NewCustomIngredient {
        user_id: request.user_id,
        name: &name,
        category: &category,
        validated: validation.verified,
    };

    let id: Uuid = match diesel::insert_into(custom_ingredients::table)
        .values(&new_ingredient)
        .returning(custom_ingredients::id)
        .get_result(&mut conn)
    {
        Ok(id) => id,
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: "Ingredient already exists!".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to save custom ingredient: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(ingredient = %name, "Custom ingredient saved");

    (
        StatusCode::CREATED,
        Json(SaveIngredientResponse {
            success: true,
            message: "Custom ingredient saved!".to_string(),
            ingredient: IngredientSummary { id, name, category },
        }),
    )
        .into_response()
}
