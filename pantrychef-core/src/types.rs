use serde::{Deserialize, Serialize};

/// A generated or saved cooking instruction document.
///
/// Constructed fresh for every generation request and never mutated after
/// enhancement. Times are free-text ("15 mins"), not normalized durations,
/// and `difficulty` is whatever the model returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Synthetic id (unix millis + index). Unique within one response only.
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default = "default_servings")]
    pub servings: i32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Fabricated display rating in [4, 5]. Not backed by any review data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    /// Fabricated review count in [10, 109]. Not backed by any review data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i32>,
}

fn default_servings() -> i32 {
    4
}

/// Where a recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    Gpt,
    Fallback,
    UserSaved,
}

impl RecipeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeSource::Gpt => "gpt",
            RecipeSource::Fallback => "fallback",
            RecipeSource::UserSaved => "user_saved",
        }
    }
}

/// One recipe-generation request, after input capture.
///
/// Three shapes map onto this struct: structured selection (ingredient lists
/// plus preferences), a raw voice transcript, or surprise mode with nothing
/// set at all.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub base_ingredients: Vec<String>,
    pub main_ingredients: Vec<String>,
    pub meal_type: String,
    pub dietary: String,
    /// Raw speech-to-text transcript, passed to the model verbatim.
    pub voice_request: Option<String>,
    pub surprise_mode: bool,
}

impl GenerateRequest {
    /// All selected ingredients, base first, in selection order.
    pub fn all_ingredients(&self) -> Vec<&str> {
        self.base_ingredients
            .iter()
            .chain(self.main_ingredients.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Result of one trip through the generation pipeline.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub recipes: Vec<Recipe>,
    pub source: RecipeSource,
}
