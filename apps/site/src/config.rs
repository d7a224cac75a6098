use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `resumes.json` and one `{id}.json` per résumé.
    pub data_dir: PathBuf,
    /// When set, documents are fetched from this origin instead of `data_dir`.
    pub data_base_url: Option<Url>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_base_url = lookup("DATA_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| Url::parse(&v).with_context(|| format!("DATA_BASE_URL '{v}' is not a valid URL")))
            .transpose()?;

        Ok(Config {
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            data_base_url,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
