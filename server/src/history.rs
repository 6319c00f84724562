//! Best-effort recording of generation events.
//!
//! One write-only row per generation request, for offline analytics. The
//! write runs on a spawned task after the response is prepared; a failure is
//! logged at warn and otherwise swallowed, and nothing here can affect the
//! generation response.

use crate::db::DbPool;
use crate::models::{lines_to_json, NewHistoryEvent};
use crate::schema::recipe_history;
use crate::AppState;
use diesel::prelude::*;
use pantrychef_core::{GenerateRequest, RecipeSource};
use uuid::Uuid;

pub fn spawn_record(
    state: &AppState,
    request: &GenerateRequest,
    user_id: Option<Uuid>,
    recipes_generated: usize,
    source: RecipeSource,
) {
    let Some(pool) = state.db.clone() else {
        tracing::debug!("No database configured, skipping history record");
        return;
    };

    let request = request.clone();
    let recipes_generated = recipes_generated as i32;
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            record(&pool, &request, user_id, recipes_generated, source)
        })
        .await;

        match result {
            Ok(Ok(())) => tracing::debug!("Generation history recorded"),
            Ok(Err(e)) => tracing::warn!("Failed to record generation history: {}", e),
            Err(e) => tracing::warn!("History task panicked: {}", e),
        }
    });
}

fn record(
    pool: &DbPool,
    request: &GenerateRequest,
    user_id: Option<Uuid>,
    recipes_generated: i32,
    source: RecipeSource,
) -> Result<(), HistoryError> {
    let mut conn = pool.get().map_err(|e| HistoryError(e.to_string()))?;

    let base = lines_to_json(&request.base_ingredients);
    let main = lines_to_json(&request.main_ingredients);
    let customizations = serde_json::json!({
        "voiceRequest": request.voice_request,
    })
    .to_string();

    let event = NewHistoryEvent {
        user_id,
        base_ingredients: &base,
        main_ingredients: &main,
        meal_type: non_empty(&request.meal_type),
        dietary: non_empty(&request.dietary),
        customizations: &customizations,
        surprise_mode: request.surprise_mode,
        recipes_generated,
        source: source.as_str(),
        success: true,
    };

    diesel::insert_into(recipe_history::table)
        .values(&event)
        .execute(&mut conn)
        .map_err(|e| HistoryError(e.to_string()))?;

    Ok(())
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct HistoryError(String);
