//! The generator page and its form handler.

use std::path::Path;

use askama::Template;
use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::PageError;
use crate::generate::{on_generate, GenerateOutcome};
use crate::session::SessionHistoryEntry;
use crate::state::AppState;

const TONES: [&str; 3] = ["Formal", "Neutral", "Casual"];
const DEFAULT_TONE: &str = "Neutral";
const DEFAULT_LENGTH: u32 = 500;

pub struct ToneOption {
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub session_id: Uuid,
    pub headline: String,
    pub tones: Vec<ToneOption>,
    pub length: u32,
    /// Rendered article or error text from the last submit.
    pub output: Option<String>,
    pub output_is_error: bool,
    pub download_url: Option<String>,
    pub articles_generated: usize,
    /// Newest first.
    pub history: Vec<SessionHistoryEntry>,
}

/// Raw form fields. Everything arrives as text so a hand-edited or partial
/// submit still gets the page back with a message instead of a bare 422.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateForm {
    pub session_id: String,
    pub headline: String,
    pub tone: String,
    pub length: String,
}

impl GenerateForm {
    /// A missing or garbled id starts a fresh session.
    fn session_id(&self) -> Uuid {
        self.session_id
            .trim()
            .parse()
            .unwrap_or_else(|_| Uuid::new_v4())
    }

    fn tone(&self) -> &str {
        match self.tone.trim() {
            "" => DEFAULT_TONE,
            tone => tone,
        }
    }

    fn length(&self) -> Result<u32, String> {
        match self.length.trim() {
            "" => Ok(DEFAULT_LENGTH),
            raw => raw
                .parse()
                .map_err(|_| format!("Error: length must be a whole number of words, got '{raw}'")),
        }
    }
}

fn tone_options(selected: &str) -> Vec<ToneOption> {
    TONES
        .into_iter()
        .map(|label| ToneOption {
            label,
            checked: label.eq_ignore_ascii_case(selected),
        })
        .collect()
}

/// Files are served from the download dir under `/downloads`.
fn download_url(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| format!("/downloads/{name}"))
}

/// GET /
/// Every fresh page load starts a new session.
pub async fn index_page() -> Result<Html<String>, PageError> {
    let page = IndexTemplate {
        session_id: Uuid::new_v4(),
        headline: String::new(),
        tones: tone_options(DEFAULT_TONE),
        length: DEFAULT_LENGTH,
        output: None,
        output_is_error: false,
        download_url: None,
        articles_generated: 0,
        history: Vec::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /generate
pub async fn generate_page(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, PageError> {
    let session_id = form.session_id();
    let tone = form.tone().to_string();
    let session = state.sessions.open(session_id).await;
    let mut history = session.lock().await;

    let (length, outcome) = match form.length() {
        Ok(length) => {
            let outcome = on_generate(
                &state.client,
                &state.config.download_dir,
                &mut history,
                &form.headline,
                &tone,
                length,
            )
            .await;
            (length, outcome)
        }
        Err(message) => {
            warn!("Rejected form submit: {message}");
            let outcome = GenerateOutcome {
                rendered: message,
                download: None,
                session_count: history.len(),
            };
            (DEFAULT_LENGTH, outcome)
        }
    };

    let page = IndexTemplate {
        session_id,
        tones: tone_options(&tone),
        length,
        output_is_error: !outcome.succeeded(),
        download_url: outcome.download.as_deref().and_then(download_url),
        articles_generated: outcome.session_count,
        history: history.entries().iter().rev().cloned().collect(),
        output: Some(outcome.rendered),
        headline: form.headline,
    };
    Ok(Html(page.render()?))
}
