//! Download endpoint for generated articles.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::generate::is_article_file_name;
use crate::state::AppState;

/// GET /downloads/:file_name
/// Serves a generated article as a text attachment. Any other name in the
/// download dir is a 404, whether or not the file exists.
pub async fn download_article(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    if !is_article_file_name(&file_name) {
        warn!(file_name = %file_name, "Refusing download of non-article file");
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = state.config.download_dir.join(&file_name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            error!("Failed to read {}: {e}", path.display());
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
