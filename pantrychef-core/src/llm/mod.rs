//! LLM provider abstraction for recipe generation.
//!
//! A trait-based abstraction over chat-completion providers, with a fake
//! implementation for tests and for running without an API key.

mod fake;
mod openai;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations issue exactly one completion request per call. There is no
/// retry, streaming, or backoff; every failure is permanent for that request
/// and the caller decides what to do with it.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a system instruction and user prompt, get the raw text completion.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables.
///
/// - `OPENAI_API_KEY`: API key; when absent the server degrades to a
///   [`FakeProvider`] that fails every completion, which routes all
///   generation through the fallback recipes instead of failing startup.
/// - `PANTRYCHEF_MODEL`: model name (default: "gpt-4o-mini")
/// - `OPENAI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
pub fn provider_from_env() -> Box<dyn LlmProvider> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            let model =
                std::env::var("PANTRYCHEF_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
            let base_url = std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| openai::DEFAULT_BASE_URL.to_string());
            Box::new(OpenAiProvider::new(api_key, model, base_url))
        }
        _ => {
            tracing::warn!(
                "OPENAI_API_KEY not set - recipe generation will serve fallback recipes"
            );
            Box::new(FakeProvider::new())
        }
    }
}
