// Channel lookup — `channels.list` with part=snippet,statistics.
//
// Provides the subscriber count (for the size filter) and the channel
// creation date (for the age filter).

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::YouTubeClient;
use super::videos::parse_count;

/// The channel fields the research filters need.
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    pub id: String,
    pub title: String,
    pub subscribers: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl ChannelInfo {
    /// Channel age in whole days at `now`, if the creation date is known.
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.created_at.map(|created| (now - created).num_days())
    }

    pub fn url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.id)
    }
}

/// Fetch info for up to 50 channels in one call, keyed by channel id.
///
/// Channels with hidden subscriber counts report 0 subscribers — the
/// subscriber filter treats them like brand-new channels rather than
/// dropping them.
pub async fn fetch_channels(
    client: &YouTubeClient,
    channel_ids: &[String],
) -> Result<HashMap<String, ChannelInfo>> {
    if channel_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let ids = channel_ids.join(",");
    let response: ChannelListResponse = client
        .get("channels", &[("part", "snippet,statistics"), ("id", &ids)])
        .await
        .context("Failed to fetch channel info")?;

    let channels: HashMap<String, ChannelInfo> = response
        .items
        .into_iter()
        .map(|item| {
            let snippet = item.snippet.unwrap_or_default();
            let stats = item.statistics.unwrap_or_default();
            let info = ChannelInfo {
                id: item.id.clone(),
                title: snippet.title,
                subscribers: parse_count(stats.subscriber_count.as_deref()),
                created_at: snippet
                    .published_at
                    .and_then(|s| s.parse::<DateTime<Utc>>().ok()),
            };
            (item.id, info)
        })
        .collect();

    debug!(
        requested = channel_ids.len(),
        returned = channels.len(),
        "Channel info fetched"
    );

    Ok(channels)
}

// -- Serde types for channels.list --

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    id: String,
    snippet: Option<ChannelSnippet>,
    statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Deserialize, Default)]
struct ChannelSnippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    subscriber_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_age_days() {
        let now = Utc::now();
        let info = ChannelInfo {
            id: "c1".to_string(),
            title: "Test".to_string(),
            subscribers: 100,
            created_at: Some(now - Duration::days(90)),
        };
        assert_eq!(info.age_days(now), Some(90));
    }

    #[test]
    fn test_age_days_unknown_creation() {
        let info = ChannelInfo {
            id: "c1".to_string(),
            title: "Test".to_string(),
            subscribers: 100,
            created_at: None,
        };
        assert_eq!(info.age_days(Utc::now()), None);
    }
}
