// YouTube Data API client — key-authenticated GET over HTTP.
//
// The Data API's read endpoints all follow the same shape: a resource name,
// a set of query parameters, and a JSON response with an `items` array. This
// client is a thin reqwest wrapper with a generic GET helper; the endpoint
// modules (search, videos, channels) own their own response types.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default base URL for YouTube Data API v3.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// HTTP client for YouTube Data API v3 read endpoints.
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Create a new client for the given base URL and API key.
    ///
    /// Pass a different base URL for testing against a local stub.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("vidscout/0.1 (channel research)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Make a GET request to a Data API resource and deserialize the response.
    ///
    /// `resource` is the endpoint name (e.g. "search", "videos", "channels").
    /// The API key is appended automatically. Quota and argument errors come
    /// back as non-2xx responses with a JSON body — surfaced verbatim in the
    /// error message.
    pub async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        debug!(resource = resource, "Data API GET request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Data API request failed: {resource}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Data API {resource} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {resource} response"))
    }
}
