use crate::article_client::ArticleClient;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared state for the web client's handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: ArticleClient,
    pub sessions: SessionStore,
    pub config: Config,
}
