use std::path::PathBuf;

use anyhow::{Context, Result};

/// Web client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the article generation API.
    pub article_api_url: String,
    /// Where generated articles are written for download. Only files named
    /// like generated articles are ever served back out of it.
    pub download_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            article_api_url: std::env::var("ARTICLE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            download_dir: std::env::var("DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("downloads")),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "7860".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
