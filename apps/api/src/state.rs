use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Text provider. Gemini in production; tests swap in stubs.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
