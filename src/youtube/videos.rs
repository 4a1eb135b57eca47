// Video statistics — `videos.list` with part=statistics.
//
// The Data API returns every counter as a JSON string ("viewCount":
// "12345"), and omits counters the uploader has hidden. Both cases parse
// defensively to 0.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::client::YouTubeClient;

/// Engagement counters for one video.
#[derive(Debug, Clone, Default)]
pub struct VideoStats {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Fetch statistics for up to 50 videos in one call, keyed by video id.
pub async fn fetch_stats(
    client: &YouTubeClient,
    video_ids: &[String],
) -> Result<HashMap<String, VideoStats>> {
    if video_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let ids = video_ids.join(",");
    let response: VideoListResponse = client
        .get("videos", &[("part", "statistics"), ("id", &ids)])
        .await
        .context("Failed to fetch video statistics")?;

    let stats: HashMap<String, VideoStats> = response
        .items
        .into_iter()
        .map(|item| {
            let raw = item.statistics.unwrap_or_default();
            (
                item.id,
                VideoStats {
                    views: parse_count(raw.view_count.as_deref()),
                    likes: parse_count(raw.like_count.as_deref()),
                    comments: parse_count(raw.comment_count.as_deref()),
                },
            )
        })
        .collect();

    debug!(requested = video_ids.len(), returned = stats.len(), "Video stats fetched");

    Ok(stats)
}

/// Parse a string-encoded counter, treating missing or malformed as 0.
pub(crate) fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|s| s.parse().ok()).unwrap_or(0)
}

// -- Serde types for videos.list --

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    statistics: Option<RawStatistics>,
}

#[derive(Debug, Deserialize, Default)]
struct RawStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
    #[serde(rename = "commentCount")]
    comment_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_valid() {
        assert_eq!(parse_count(Some("12345")), 12345);
    }

    #[test]
    fn test_parse_count_missing_or_malformed() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("n/a")), 0);
        assert_eq!(parse_count(Some("-5")), 0);
    }
}
