//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_article, ArticleResponse, GenerateArticleRequest};
use crate::state::AppState;

/// POST /generate-article
///
/// Validates the request, generates the article and returns it with metadata.
/// Malformed bodies are reported as 422 with the same `{detail}` shape as
/// every other error.
pub async fn handle_generate_article(
    State(state): State<AppState>,
    payload: Result<Json<GenerateArticleRequest>, JsonRejection>,
) -> Result<Json<ArticleResponse>, AppError> {
    let Json(request) = payload?;
    let spec = request.validate()?;

    let response = generate_article(state.generator.as_ref(), spec).await?;

    Ok(Json(response))
}
