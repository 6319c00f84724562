//! The recipe-generation pipeline.
//!
//! Prompt builder -> LLM client -> parser -> enhancer, with the hand-authored
//! fallback substituted on any provider or parse failure. This boundary never
//! errors: callers always receive at least one enhanced recipe.

use crate::enhance::enhance_recipes;
use crate::fallback::fallback_recipes;
use crate::llm::LlmProvider;
use crate::parse::parse_recipes;
use crate::prompt::{render_prompt, SYSTEM_INSTRUCTION};
use crate::types::{GenerateRequest, GenerationOutcome, RecipeSource};

/// Run one generation request to completion.
///
/// Issues exactly one completion call; a transport error, provider error, or
/// unparseable response all land on the fallback path and are invisible to
/// the caller beyond the reported [`RecipeSource`].
pub async fn generate_recipes(
    provider: &dyn LlmProvider,
    request: &GenerateRequest,
) -> GenerationOutcome {
    let prompt = render_prompt(request);

    let (recipes, source) = match provider.complete(SYSTEM_INSTRUCTION, &prompt).await {
        Ok(raw) => match parse_recipes(&raw) {
            Ok(recipes) => (recipes, RecipeSource::Gpt),
            Err(e) => {
                tracing::warn!(
                    provider = provider.provider_name(),
                    "Unusable model response, serving fallback: {}",
                    e
                );
                (fallback_recipes(request), RecipeSource::Fallback)
            }
        },
        Err(e) => {
            tracing::warn!(
                provider = provider.provider_name(),
                "LLM call failed, serving fallback: {}",
                e
            );
            (fallback_recipes(request), RecipeSource::Fallback)
        }
    };

    GenerationOutcome {
        recipes: enhance_recipes(recipes),
        source,
    }
}
