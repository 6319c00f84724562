pub mod enhance;
pub mod fallback;
pub mod generate;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod types;
pub mod validator;

pub use enhance::enhance_recipes;
pub use fallback::fallback_recipes;
pub use generate::generate_recipes;
pub use llm::{provider_from_env, FakeProvider, LlmError, LlmProvider, OpenAiProvider};
pub use parse::{parse_recipes, strip_code_fences, ParseRecipesError};
pub use prompt::{render_prompt, SYSTEM_INSTRUCTION};
pub use types::{GenerateRequest, GenerationOutcome, Recipe, RecipeSource};
pub use validator::{validate_ingredient, IngredientCategory, ValidationResult};
