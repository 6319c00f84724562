pub mod list;
pub mod save;
pub mod validate;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/custom",
        post(save::save_custom_ingredient).get(list::list_custom_ingredients),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        save::save_custom_ingredient,
        list::list_custom_ingredients,
        validate::validate_ingredient,
    ),
    components(schemas(
        save::SaveIngredientRequest,
        save::SaveIngredientResponse,
        save::IngredientSummary,
        list::ListIngredientsResponse,
        list::CustomIngredientResponse,
        validate::ValidateIngredientRequest,
        validate::ValidateIngredientResponse,
        validate::ValidationPayload,
    ))
)]
pub struct ApiDoc;
