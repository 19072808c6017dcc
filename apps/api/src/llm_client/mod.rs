//! LLM client: the single point of entry for all text-generation calls.
//!
//! No other module talks to the provider API directly. Route handlers and the
//! generation pipeline depend on the `TextGenerator` trait so the concrete
//! provider (Gemini in production, stubs in tests) is injected via `AppState`.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Content blocked by provider: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling parameters forwarded to the provider with every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    /// Hard cap on generated tokens.
    pub max_output_tokens: u32,
}

/// A provider that turns a prompt into text in a single round trip.
///
/// Implementations must not retry: failures are surfaced to the caller as-is.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError>;
}
