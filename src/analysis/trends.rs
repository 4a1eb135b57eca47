// Trend detection — surface keywords repeated across a corpus.
//
// Flattens each record's title keywords into one multiset and counts
// occurrences per distinct term. A term showing up in many freshly-uploaded
// titles is exactly the "everyone is making this video right now" signal
// the research sweep is looking for.

use std::collections::HashMap;

use serde::Serialize;

use super::keywords;
use crate::records::VideoRecord;

/// Keywords extracted per record when aggregating trends.
pub const TREND_KEYWORDS_PER_VIDEO: usize = 10;
/// Cap on the number of trend entries returned.
pub const MAX_TREND_ENTRIES: usize = 20;

/// A keyword and how many records it appeared in.
#[derive(Debug, Clone, Serialize)]
pub struct TrendEntry {
    pub term: String,
    pub occurrence_count: usize,
}

/// Count keyword occurrences across the corpus and keep the repeated ones.
///
/// Title-only, top 10 terms per record. Entries with fewer than
/// `min_occurrence` hits are dropped; the rest are sorted by count
/// descending (stable, first-seen order among ties) and capped at 20.
pub fn detect_trends(corpus: &[VideoRecord], min_occurrence: usize) -> Vec<TrendEntry> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for record in corpus {
        for term in keywords::extract(&record.title, TREND_KEYWORDS_PER_VIDEO) {
            let entry = counts.entry(term.clone()).or_insert(0);
            if *entry == 0 {
                order.push(term);
            }
            *entry += 1;
        }
    }

    order.retain(|t| counts[t] >= min_occurrence);
    order.sort_by_key(|t| std::cmp::Reverse(counts[t]));
    order.truncate(MAX_TREND_ENTRIES);

    order
        .into_iter()
        .map(|term| {
            let occurrence_count = counts[&term];
            TrendEntry {
                term,
                occurrence_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            metrics: Default::default(),
        }
    }

    #[test]
    fn test_repeated_terms_surface() {
        let corpus = vec![
            record("1", "Reddit Cheating Story Part 1"),
            record("2", "Reddit Cheating Story Part 2"),
            record("3", "How to Bake Bread"),
        ];
        let trends = detect_trends(&corpus, 2);
        let terms: Vec<&str> = trends.iter().map(|t| t.term.as_str()).collect();
        assert!(terms.contains(&"reddit"));
        assert!(terms.contains(&"cheating"));
        assert!(terms.contains(&"story"));
        // Nothing from the bread title appears twice
        assert!(!terms.contains(&"bread"));
        for t in &trends {
            assert!(t.occurrence_count >= 2);
        }
    }

    #[test]
    fn test_min_occurrence_one_keeps_everything() {
        let corpus = vec![record("1", "Minecraft Speedrun"), record("2", "Bread Baking")];
        let trends = detect_trends(&corpus, 1);
        assert_eq!(trends.len(), 4);
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let corpus = vec![
            record("1", "Minecraft Speedrun Record"),
            record("2", "Minecraft Speedrun Attempt"),
            record("3", "Minecraft Building Tutorial"),
        ];
        let trends = detect_trends(&corpus, 1);
        assert_eq!(trends[0].term, "minecraft");
        assert_eq!(trends[0].occurrence_count, 3);
        for window in trends.windows(2) {
            assert!(window[0].occurrence_count >= window[1].occurrence_count);
        }
    }

    #[test]
    fn test_empty_corpus() {
        assert!(detect_trends(&[], 1).is_empty());
    }

    #[test]
    fn test_capped_at_max_entries() {
        // Digits are token separators, so distinct terms need letter
        // suffixes. 15 title variants x 3 terms, two records each —
        // 45 distinct terms all clearing min_occurrence = 2.
        let corpus: Vec<VideoRecord> = (0..30u8)
            .map(|i| {
                let suffix = (b'a' + i / 2) as char;
                record(
                    &i.to_string(),
                    &format!("topic{suffix} subject{suffix} theme{suffix}"),
                )
            })
            .collect();
        let trends = detect_trends(&corpus, 2);
        assert!(trends.len() <= MAX_TREND_ENTRIES);
        assert_eq!(trends.len(), MAX_TREND_ENTRIES);
    }
}
