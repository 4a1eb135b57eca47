// Video search — `search.list` by keyword with a published-after cutoff.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::YouTubeClient;

/// One search hit with the snippet fields the pipeline needs.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub video_id: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Search for videos matching `query`, newest first.
///
/// Only items carrying a video id are returned — the search endpoint can
/// also surface channels and playlists, which the research sweep ignores.
/// One page only; `max_results` is capped by the API at 50.
pub async fn search_videos(
    client: &YouTubeClient,
    query: &str,
    published_after: DateTime<Utc>,
    max_results: u32,
) -> Result<Vec<SearchHit>> {
    let published = published_after.to_rfc3339_opts(SecondsFormat::Secs, true);
    let max = max_results.min(50).to_string();

    let response: SearchResponse = client
        .get(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("order", "date"),
                ("publishedAfter", &published),
                ("maxResults", &max),
            ],
        )
        .await
        .with_context(|| format!("Search failed for keyword '{query}'"))?;

    let hits: Vec<SearchHit> = response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let snippet = item.snippet?;
            Some(SearchHit {
                video_id,
                channel_id: snippet.channel_id,
                title: snippet.title,
                description: snippet.description,
                published_at: snippet
                    .published_at
                    .and_then(|s| s.parse::<DateTime<Utc>>().ok()),
            })
        })
        .collect();

    debug!(query = query, hits = hits.len(), "Search page fetched");

    Ok(hits)
}

// -- Serde types for search.list --

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Option<SearchSnippet>,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    #[serde(rename = "channelId")]
    channel_id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}
