//! Article generation: turns a validated headline request into an article.
//!
//! Flow: validate request → build prompt → derive sampling params →
//!       provider call → trim → word count → response.
//!
//! Nothing is persisted; each call is independent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::ARTICLE_PROMPT_TEMPLATE;
use crate::generation::tone::Tone;
use crate::llm_client::{GenerationParams, TextGenerator};

pub const DEFAULT_LENGTH: u32 = 500;
/// Upper bound on the requested word target.
pub const MAX_LENGTH: u32 = 10_000;
/// Rough words → tokens conversion used for the output cap.
const TOKENS_PER_WORD: u32 = 4;

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /generate-article`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateArticleRequest {
    pub headline: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub length: Option<u32>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSpec {
    pub headline: String,
    pub tone: Tone,
    pub length: u32,
}

/// Response body for `POST /generate-article`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub headline: String,
    pub article: String,
    pub generated_at: DateTime<Utc>,
    pub word_count: usize,
}

impl GenerateArticleRequest {
    /// Applies defaults and rejects blank headlines, unknown tones and
    /// out-of-range word targets.
    pub fn validate(self) -> Result<ArticleSpec, AppError> {
        if self.headline.trim().is_empty() {
            return Err(AppError::Validation("headline cannot be empty".to_string()));
        }

        let tone = match self.tone.as_deref() {
            Some(raw) => raw.parse::<Tone>().map_err(AppError::Validation)?,
            None => Tone::default(),
        };

        let length = self.length.unwrap_or(DEFAULT_LENGTH);
        if length == 0 || length > MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "length must be between 1 and {MAX_LENGTH} words"
            )));
        }

        Ok(ArticleSpec {
            headline: self.headline,
            tone,
            length,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates one article. Provider failures come back as `AppError::Generation`
/// with the underlying cause embedded; there is no retry.
pub async fn generate_article(
    generator: &dyn TextGenerator,
    spec: ArticleSpec,
) -> Result<ArticleResponse, AppError> {
    let prompt = build_prompt(&spec.headline, spec.tone);
    let params = generation_params(spec.length);

    info!(
        tone = %spec.tone,
        length = spec.length,
        max_output_tokens = params.max_output_tokens,
        "Generating article"
    );

    let raw = generator.generate(&prompt, &params).await?;
    let article = raw.trim().to_string();
    let word_count = count_words(&article);

    info!(word_count, "Article generated");

    Ok(ArticleResponse {
        headline: spec.headline,
        article,
        generated_at: Utc::now(),
        word_count,
    })
}

/// Fills the prompt template. The tone line is substituted before the headline
/// so placeholder text inside a headline is left alone.
pub fn build_prompt(headline: &str, tone: Tone) -> String {
    ARTICLE_PROMPT_TEMPLATE
        .replace("{tone_guidance}", tone.style_guidance())
        .replace("{headline}", headline.trim())
}

pub fn generation_params(length: u32) -> GenerationParams {
    GenerationParams {
        temperature: TEMPERATURE,
        top_p: TOP_P,
        top_k: TOP_K,
        max_output_tokens: length.saturating_mul(TOKENS_PER_WORD),
    }
}

/// Naive whitespace word count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
