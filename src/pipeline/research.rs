// Keyword research sweep: search -> stats -> channels -> join -> filter.
//
// For each keyword, run one search page, then batch-fetch video statistics
// and channel info for the hits, join the three, and apply the subscriber
// and channel-age filters. Keywords run sequentially — a sweep is a handful
// of keywords, and the Data API quota punishes bursts anyway. A failed
// keyword is logged and skipped, never fatal to the sweep.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::records::{VideoMetrics, VideoRecord};
use crate::youtube::channels::{self, ChannelInfo};
use crate::youtube::client::YouTubeClient;
use crate::youtube::search;
use crate::youtube::videos;

/// Sweep parameters, straight from the CLI flags.
#[derive(Debug, Clone)]
pub struct ResearchParams {
    /// One search per keyword.
    pub keywords: Vec<String>,
    /// Only videos published within this many days.
    pub published_within_days: u32,
    /// Drop channels below this subscriber count.
    pub min_subscribers: u64,
    /// Drop channels above this subscriber count, when set.
    pub max_subscribers: Option<u64>,
    /// Drop channels older than this many days, when set.
    pub max_channel_age_days: Option<i64>,
    /// Search page size per keyword (API cap: 50).
    pub max_results_per_keyword: u32,
}

/// One filtered research result: the video record plus the channel context
/// the filters and reports need.
#[derive(Debug, Clone)]
pub struct ResearchHit {
    /// The keyword whose search surfaced this video.
    pub keyword: String,
    pub video: VideoRecord,
    pub channel_name: String,
    pub channel_id: String,
    pub published_at: Option<DateTime<Utc>>,
    pub channel_age_days: Option<i64>,
}

impl ResearchHit {
    pub fn channel_url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id)
    }
}

/// Run the full research sweep and return the filtered hits.
pub async fn run(client: &YouTubeClient, params: &ResearchParams) -> Result<Vec<ResearchHit>> {
    let now = Utc::now();
    let published_after = now - Duration::days(i64::from(params.published_within_days));

    let mut hits: Vec<ResearchHit> = Vec::new();

    let pb = ProgressBar::new(params.keywords.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Searching [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for keyword in &params.keywords {
        match sweep_keyword(client, keyword, published_after, now, params).await {
            Ok(mut keyword_hits) => hits.append(&mut keyword_hits),
            Err(e) => {
                warn!(keyword = %keyword, error = %e, "Keyword search failed, skipping");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        keywords = params.keywords.len(),
        hits = hits.len(),
        "Research sweep complete"
    );

    Ok(hits)
}

/// Search one keyword, join stats and channel info, and filter.
async fn sweep_keyword(
    client: &YouTubeClient,
    keyword: &str,
    published_after: DateTime<Utc>,
    now: DateTime<Utc>,
    params: &ResearchParams,
) -> Result<Vec<ResearchHit>> {
    let search_hits = search::search_videos(
        client,
        keyword,
        published_after,
        params.max_results_per_keyword,
    )
    .await?;

    if search_hits.is_empty() {
        return Ok(Vec::new());
    }

    let video_ids: Vec<String> = search_hits.iter().map(|h| h.video_id.clone()).collect();
    let mut channel_ids: Vec<String> = search_hits.iter().map(|h| h.channel_id.clone()).collect();
    channel_ids.sort();
    channel_ids.dedup();

    let stats = videos::fetch_stats(client, &video_ids).await?;
    let channels = channels::fetch_channels(client, &channel_ids).await?;

    let hits = search_hits
        .into_iter()
        .filter_map(|hit| {
            // Hits without stats or channel info can't be filtered — drop them.
            let video_stats = stats.get(&hit.video_id)?;
            let channel = channels.get(&hit.channel_id)?;
            let channel_age_days = channel.age_days(now);

            if !channel_passes(channel, channel_age_days, params) {
                return None;
            }

            Some(ResearchHit {
                keyword: keyword.to_string(),
                video: VideoRecord {
                    id: hit.video_id,
                    title: hit.title,
                    description: hit.description,
                    metrics: VideoMetrics {
                        views: video_stats.views,
                        likes: video_stats.likes,
                        comments: video_stats.comments,
                        subscribers: channel.subscribers,
                    },
                },
                channel_name: channel.title.clone(),
                channel_id: hit.channel_id,
                published_at: hit.published_at,
                channel_age_days,
            })
        })
        .collect();

    Ok(hits)
}

/// Apply the subscriber range and channel-age filters.
///
/// A channel with an unknown creation date passes the age filter — the
/// point of the filter is finding young channels, and dropping unknowns
/// would silently hide candidates.
fn channel_passes(
    channel: &ChannelInfo,
    channel_age_days: Option<i64>,
    params: &ResearchParams,
) -> bool {
    if channel.subscribers < params.min_subscribers {
        return false;
    }
    if let Some(max) = params.max_subscribers {
        if channel.subscribers > max {
            return false;
        }
    }
    if let Some(max_age) = params.max_channel_age_days {
        if let Some(age) = channel_age_days {
            if age > max_age {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ResearchParams {
        ResearchParams {
            keywords: vec!["reddit stories".to_string()],
            published_within_days: 30,
            min_subscribers: 0,
            max_subscribers: Some(5000),
            max_channel_age_days: Some(365),
            max_results_per_keyword: 10,
        }
    }

    fn channel(subscribers: u64) -> ChannelInfo {
        ChannelInfo {
            id: "c1".to_string(),
            title: "Test Channel".to_string(),
            subscribers,
            created_at: None,
        }
    }

    #[test]
    fn test_subscriber_range_filter() {
        let p = params();
        assert!(channel_passes(&channel(4000), Some(100), &p));
        assert!(!channel_passes(&channel(6000), Some(100), &p));

        let mut floor = params();
        floor.min_subscribers = 1000;
        assert!(!channel_passes(&channel(500), Some(100), &floor));
    }

    #[test]
    fn test_channel_age_filter() {
        let p = params();
        assert!(channel_passes(&channel(100), Some(200), &p));
        assert!(!channel_passes(&channel(100), Some(400), &p));
    }

    #[test]
    fn test_unknown_age_passes_age_filter() {
        let p = params();
        assert!(channel_passes(&channel(100), None, &p));
    }

    #[test]
    fn test_no_limits_pass_everything() {
        let p = ResearchParams {
            keywords: vec![],
            published_within_days: 30,
            min_subscribers: 0,
            max_subscribers: None,
            max_channel_age_days: None,
            max_results_per_keyword: 10,
        };
        assert!(channel_passes(&channel(10_000_000), Some(5000), &p));
    }
}
