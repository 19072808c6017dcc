pub mod downloads;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index_page))
        .route("/generate", post(pages::generate_page))
        .route("/health", get(health::health_handler))
        .route("/downloads/:file_name", get(downloads::download_article))
        .with_state(state)
}
