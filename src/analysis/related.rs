// Similarity search — rank an entire corpus against one target video.
//
// Uses title+description keywords on both sides (unlike clustering, which
// is title-only): when the caller has picked a specific target, the extra
// description signal is worth the cost of one extraction per record.

use anyhow::Result;
use tracing::debug;

use super::similarity::{score_with_keywords, SimilarityResult, PAIRWISE_KEYWORDS};
use super::{keywords, validate_threshold};
use crate::records::VideoRecord;

/// Rank every other record in `corpus` against `target`.
///
/// Results are filtered to `combined_score >= threshold` and sorted by
/// combined score descending; ties keep corpus iteration order (stable
/// sort). The target itself is skipped by id. An empty or single-record
/// corpus yields an empty vec.
pub fn find_similar(
    target: &VideoRecord,
    corpus: &[VideoRecord],
    threshold: f64,
) -> Result<Vec<SimilarityResult>> {
    validate_threshold(threshold)?;

    let target_keywords = keywords::extract(&target.full_text(), PAIRWISE_KEYWORDS);

    let mut results: Vec<SimilarityResult> = corpus
        .iter()
        .filter(|other| other.id != target.id)
        .map(|other| {
            let other_keywords = keywords::extract(&other.full_text(), PAIRWISE_KEYWORDS);
            score_with_keywords(target, other, &target_keywords, &other_keywords)
        })
        .filter(|result| result.combined_score >= threshold)
        .collect();

    // Stable sort keeps corpus order among equal scores.
    results.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        target = %target.id,
        matches = results.len(),
        threshold,
        "Similarity search complete"
    );

    Ok(results)
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
    fn test_target_never_in_results() {
        let target = record("1", "Reddit Cheating Story Part 1");
        let corpus = vec![
            record("1", "Reddit Cheating Story Part 1"),
            record("2", "Reddit Cheating Story Part 2"),
        ];
        let results = find_similar(&target, &corpus, 0.0).unwrap();
        assert!(results.iter().all(|r| r.other_id != "1"));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_zero_threshold_returns_all_others() {
        let target = record("1", "Reddit Cheating Story");
        let corpus = vec![
            record("1", "Reddit Cheating Story"),
            record("2", "How to Bake Bread"),
            record("3", "Minecraft Speedrun"),
        ];
        let results = find_similar(&target, &corpus, 0.0).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_results_sorted_descending() {
        let target = record("1", "Reddit Cheating Story Part 1");
        let corpus = vec![
            record("1", "Reddit Cheating Story Part 1"),
            record("2", "How to Bake Bread"),
            record("3", "Reddit Cheating Story Part 2"),
        ];
        let results = find_similar(&target, &corpus, 0.0).unwrap();
        for window in results.windows(2) {
            assert!(window[0].combined_score >= window[1].combined_score);
        }
        assert_eq!(results[0].other_id, "3");
    }

    #[test]
    fn test_empty_corpus_is_empty_result() {
        let target = record("1", "Anything");
        assert!(find_similar(&target, &[], 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let target = record("1", "Anything");
        assert!(find_similar(&target, &[], -0.1).is_err());
        assert!(find_similar(&target, &[], 1.5).is_err());
        assert!(find_similar(&target, &[], f64::NAN).is_err());
    }
}
