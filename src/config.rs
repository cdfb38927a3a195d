//! Runtime configuration.
//!
//! Resolved once at startup from environment variables, with builder-style
//! setters for tests and embedding.

use std::path::PathBuf;

/// Store endpoint used when `GIDS_URL` is not set.
pub const DEFAULT_STORE_URL: &str = "https://api.nederlandsegids.nl";

/// Configuration for the reader.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the content store REST endpoint
    pub store_url: String,
    /// Anon API key sent with every request, if the store requires one
    pub api_key: Option<String>,
    /// Where the operational log is written (stdout belongs to the TUI)
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            api_key: None,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration from `GIDS_URL`, `GIDS_API_KEY` and `GIDS_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("GIDS_URL") {
            if !url.is_empty() {
                config.store_url = url;
            }
        }
        if let Ok(key) = std::env::var("GIDS_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(path) = std::env::var("GIDS_LOG") {
            if !path.is_empty() {
                config.log_path = PathBuf::from(path);
            }
        }
        config
    }

    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }
}

/// Default log location: the platform state dir, falling back to the cache
/// dir and finally the temp dir.
fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("gids")
        .join("gids.log")
}
