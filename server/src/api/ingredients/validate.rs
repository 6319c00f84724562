use crate::api::ErrorResponse;
use axum::{http::StatusCode, response::IntoResponse, Json};
use pantrychef_core::validator::{self, ValidationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ValidateIngredientRequest {
    pub ingredient: String,
}

/// Wire form of a validation verdict.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationPayload {
    pub valid: bool,
    pub name: String,
    pub category: String,
    pub verified: bool,
    pub reason: String,
}

impl From<ValidationResult> for ValidationPayload {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            name: result.name,
            category: result.category.as_str().to_string(),
            verified: result.verified,
            reason: result.reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidateIngredientResponse {
    pub success: bool,
    pub validation: ValidationPayload,
}

/// Stateless heuristic check; never touches the store.
#[utoipa::path(
    post,
    path = "/api/validate-ingredient",
    tag = "ingredients",
    request_body = ValidateIngredientRequest,
    responses(
        (status = 200, description = "Validation verdict (valid or not)", body = ValidateIngredientResponse),
        (status = 400, description = "Missing or empty ingredient name", body = ErrorResponse)
    )
)]
pub async fn validate_ingredient(
    Json(request): Json<ValidateIngredientRequest>,
) -> impl IntoResponse {
    if request.ingredient.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Ingredient name is required".to_string(),
            }),
        )
            .into_response();
    }

    let result = validator::validate_ingredient(&request.ingredient);
    tracing::debug!(
        ingredient = %request.ingredient,
        valid = result.valid,
        "Ingredient validated"
    );

    (
        StatusCode::OK,
        Json(ValidateIngredientResponse {
            success: true,
            validation: result.into(),
        }),
    )
        .into_response()
}
