//! The "Generate Article" action behind the form.
//!
//! Validates locally, calls the API, writes the raw article for download and
//! records the generation in the caller's session history. Failures never
//! touch the history.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime};
use tracing::{info, warn};

use crate::article_client::{ArticleClient, GenerationRequest, GenerationResult};
use crate::errors::ClientError;
use crate::session::{SessionHistory, SessionHistoryEntry};

pub const EMPTY_HEADLINE_MESSAGE: &str = "Please enter a headline first!";

const ARTICLE_FILE_PREFIX: &str = "article_";
const ARTICLE_FILE_SUFFIX: &str = ".txt";
const ARTICLE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What the page shows after a generate attempt.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Markdown rendering of the article, or the error text.
    pub rendered: String,
    /// File written for download; only set on success.
    pub download: Option<PathBuf>,
    /// Articles generated so far in this session.
    pub session_count: usize,
}

impl GenerateOutcome {
    pub fn succeeded(&self) -> bool {
        self.download.is_some()
    }
}

pub async fn on_generate(
    client: &ArticleClient,
    download_dir: &Path,
    history: &mut SessionHistory,
    headline: &str,
    tone: &str,
    length: u32,
) -> GenerateOutcome {
    if headline.trim().is_empty() {
        return GenerateOutcome {
            rendered: EMPTY_HEADLINE_MESSAGE.to_string(),
            download: None,
            session_count: history.len(),
        };
    }

    let request = GenerationRequest {
        headline: headline.to_string(),
        tone: tone.to_lowercase(),
        length,
    };

    match fetch_and_save(client, download_dir, &request).await {
        Ok((result, path)) => {
            history.record(SessionHistoryEntry {
                headline: request.headline,
                generated_at: result.generated_at.clone(),
            });
            info!(
                word_count = result.word_count,
                file = %path.display(),
                session_count = history.len(),
                "Article generated"
            );
            GenerateOutcome {
                rendered: render_markdown(&result),
                download: Some(path),
                session_count: history.len(),
            }
        }
        Err(e) => {
            warn!("Article generation failed: {e}");
            GenerateOutcome {
                rendered: e.to_string(),
                download: None,
                session_count: history.len(),
            }
        }
    }
}

async fn fetch_and_save(
    client: &ArticleClient,
    download_dir: &Path,
    request: &GenerationRequest,
) -> Result<(GenerationResult, PathBuf), ClientError> {
    let result = client.generate(request).await?;
    let path = save_article(download_dir, &result.article, Local::now()).await?;
    Ok((result, path))
}

/// Human-readable rendering shown on the page.
pub fn render_markdown(result: &GenerationResult) -> String {
    format!(
        "# {}\n\nGenerated on {}\n\n{}\n\nWord count: {}\n",
        result.headline, result.generated_at, result.article, result.word_count
    )
}

/// `article_YYYYmmdd_HHMMSS.txt`. Two articles in the same second share a name
/// and the later one overwrites the earlier.
pub fn article_file_name(at: DateTime<Local>) -> String {
    format!(
        "{ARTICLE_FILE_PREFIX}{}{ARTICLE_FILE_SUFFIX}",
        at.format(ARTICLE_TIMESTAMP_FORMAT)
    )
}

/// True only for names `article_file_name` can produce.
pub fn is_article_file_name(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix(ARTICLE_FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(ARTICLE_FILE_SUFFIX))
    else {
        return false;
    };
    // chrono accepts single-digit fields, so pin the width too.
    stamp.len() == 15 && NaiveDateTime::parse_from_str(stamp, ARTICLE_TIMESTAMP_FORMAT).is_ok()
}

/// Writes exactly the article text, nothing else.
async fn save_article(dir: &Path, article: &str, at: DateTime<Local>) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(article_file_name(at));
    tokio::fs::write(&path, article).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use chrono::TimeZone;
    use serde_json::json;
    use tempfile::TempDir;

    use crate::test_support::{spawn_api, success_reply, ARTICLE, GENERATED_AT};

    fn files_in(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[tokio::test]
    async fn test_empty_headline_never_calls_api() {
        let (client, api) = spawn_api(StatusCode::OK, success_reply("unused")).await;
        let downloads = TempDir::new().unwrap();
        let mut history = SessionHistory::default();

        for headline in ["", "   "] {
            let outcome =
                on_generate(&client, downloads.path(), &mut history, headline, "Neutral", 500)
                    .await;
            assert_eq!(outcome.rendered, EMPTY_HEADLINE_MESSAGE);
            assert!(!outcome.succeeded());
            assert_eq!(outcome.session_count, 0);
        }

        assert_eq!(api.hit_count(), 0);
        assert!(files_in(downloads.path()).is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_shows_status_and_body() {
        let (client, _api) = spawn_api(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": "Error generating article: quota exceeded" }),
        )
        .await;
        let downloads = TempDir::new().unwrap();
        let mut history = SessionHistory::default();

        let outcome = on_generate(
            &client,
            downloads.path(),
            &mut history,
            "Markets Rally",
            "Casual",
            400,
        )
        .await;

        assert!(outcome.rendered.starts_with("Error: 500"));
        assert!(outcome.rendered.contains("quota exceeded"));
        assert!(outcome.download.is_none());
        assert_eq!(outcome.session_count, 0);
        assert_eq!(history.len(), 0);
        assert!(files_in(downloads.path()).is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_reported() {
        // Bind then drop to get a port with nothing listening.
        let addr = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let client = ArticleClient::new(format!("http://{addr}"));
        let downloads = TempDir::new().unwrap();
        let mut history = SessionHistory::default();

        let outcome =
            on_generate(&client, downloads.path(), &mut history, "Storm Nears", "Formal", 200)
                .await;

        assert!(outcome.rendered.starts_with("Error generating article:"));
        assert_eq!(history.len(), 0);
    }

    #[tokio::test]
    async fn test_malformed_response_is_reported() {
        let (client, _api) = spawn_api(StatusCode::OK, json!({ "unexpected": true })).await;
        let downloads = TempDir::new().unwrap();
        let mut history = SessionHistory::default();

        let outcome =
            on_generate(&client, downloads.path(), &mut history, "Storm Nears", "Formal", 200)
                .await;

        assert!(outcome.rendered.starts_with("Error generating article:"));
        assert!(!outcome.succeeded());
        assert_eq!(history.len(), 0);
    }

    #[tokio::test]
    async fn test_successful_generation_end_to_end() {
        let headline = "Local Team Wins Championship";
        let (client, api) = spawn_api(StatusCode::OK, success_reply(headline)).await;
        let downloads = TempDir::new().unwrap();
        let mut history = SessionHistory::default();

        let outcome =
            on_generate(&client, downloads.path(), &mut history, headline, "Formal", 300).await;

        // Request sent with lowercased tone
        let bodies = api.bodies.lock().unwrap().clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["headline"], headline);
        assert_eq!(bodies[0]["tone"], "formal");
        assert_eq!(bodies[0]["length"], 300);

        // Rendered markdown
        assert!(outcome.rendered.starts_with("# Local Team Wins Championship\n"));
        assert!(outcome
            .rendered
            .contains(&format!("Generated on {GENERATED_AT}")));
        assert!(outcome.rendered.contains(ARTICLE));
        let word_count = ARTICLE.split_whitespace().count();
        assert!(outcome
            .rendered
            .ends_with(&format!("Word count: {word_count}\n")));

        // Exactly one file, containing exactly the article
        let files = files_in(downloads.path());
        assert_eq!(files.len(), 1);
        assert_eq!(outcome.download.as_deref(), Some(files[0].as_path()));
        assert_eq!(std::fs::read_to_string(&files[0]).unwrap(), ARTICLE);

        // History and counter
        assert_eq!(outcome.session_count, 1);
        assert_eq!(
            history.entries(),
            [SessionHistoryEntry {
                headline: headline.to_string(),
                generated_at: GENERATED_AT.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_counter_accumulates_within_session() {
        let (client, _api) = spawn_api(StatusCode::OK, success_reply("Budget Passes")).await;
        let downloads = TempDir::new().unwrap();
        let mut history = SessionHistory::default();

        let first =
            on_generate(&client, downloads.path(), &mut history, "Budget Passes", "Neutral", 500)
                .await;
        let second =
            on_generate(&client, downloads.path(), &mut history, "Budget Passes", "Neutral", 500)
                .await;

        assert_eq!(first.session_count, 1);
        assert_eq!(second.session_count, 2);
    }

    #[test]
    fn test_article_file_name_uses_second_resolution_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 7).unwrap();
        assert_eq!(article_file_name(at), "article_20261016_090507.txt");
    }

    #[test]
    fn test_only_generated_names_are_article_files() {
        let at = Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 7).unwrap();
        assert!(is_article_file_name(&article_file_name(at)));

        for name in [
            ".env",
            "article_.txt",
            "article_20261016_090507.txt.bak",
            "article_20261016_090507.md",
            "article_20261399_090507.txt",
            "article_2026101_090507.txt",
            "../article_20261016_090507.txt",
            "notes_20261016_090507.txt",
        ] {
            assert!(!is_article_file_name(name), "{name} accepted");
        }
    }
}
