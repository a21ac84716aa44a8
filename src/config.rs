// Configuration module: collects the values the client needs from the
// process environment into one `Config` that is passed around explicitly.

use std::path::PathBuf;

/// Default base URL of the public Data API.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Runtime configuration for the API client.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Build a `Config` from `API_KEY` and `YOUTUBE_API_BASE_URL`.
    ///
    /// A missing `API_KEY` is not reported here; the remote service rejects
    /// the first request instead.
    pub fn from_env() -> Self {
        let api_key = std::env::var("API_KEY").unwrap_or_default();
        let base_url = std::env::var("YOUTUBE_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self::new(api_key, base_url)
    }

    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Config {
            api_key: api_key.into(),
            base_url,
        }
    }
}

/// Load a `.env` file from the working directory if one exists, returning
/// its path.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let cfg = Config::new("key", "http://localhost:8080/v3//");
        assert_eq!(cfg.base_url, "http://localhost:8080/v3");
        assert_eq!(cfg.api_key, "key");
    }

    #[test]
    fn new_keeps_default_base_url() {
        let cfg = Config::new("", DEFAULT_BASE_URL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(cfg.api_key.is_empty());
    }
}
