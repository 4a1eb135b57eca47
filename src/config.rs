use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// YouTube Data API v3 key (YOUTUBE_API_KEY).
    pub api_key: String,
    /// API base URL (defaults to https://www.googleapis.com/youtube/v3).
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            api_url: env::var("YOUTUBE_API_URL")
                .unwrap_or_else(|_| crate::youtube::client::DEFAULT_API_URL.to_string()),
        })
    }

    /// Check that the API key is configured.
    /// Call this before any command that talks to the Data API.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 Get a key from the Google Cloud console (YouTube Data API v3)."
            );
        }
        Ok(())
    }
}
