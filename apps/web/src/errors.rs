use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures while asking the API for an article. The `Display` text is what
/// the user sees in place of the article.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status.
    #[error("Error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Network failure or a response body that is not a generation result.
    #[error("Error generating article: {0}")]
    Transport(#[from] reqwest::Error),

    /// The article could not be written for download.
    #[error("Error generating article: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that prevent a page from being rendered at all.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal server error occurred",
        )
            .into_response()
    }
}
