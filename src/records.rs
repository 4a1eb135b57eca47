// Video record model — the unit of analysis.
//
// A VideoRecord is what the search layer hands to the analysis core: an id,
// title, optional description, and a bag of engagement metrics. The core
// reads only id/title/description; metrics pass through untouched so the
// display and export layers can sort and report on them.

use serde::{Deserialize, Serialize};

/// A single video as seen by the analysis core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Unique identifier — the platform video id (also usable as a URL suffix).
    pub id: String,
    pub title: String,
    /// May be empty; the search endpoint truncates long descriptions.
    #[serde(default)]
    pub description: String,
    /// Engagement metrics, carried through the core untouched.
    #[serde(default)]
    pub metrics: VideoMetrics,
}

/// Engagement numbers for a video and its channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetrics {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub subscribers: u64,
}

impl VideoRecord {
    /// Title and description joined for keyword extraction.
    pub fn full_text(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.title, self.description)
        }
    }

    /// Canonical watch URL for display and CSV export.
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}
