// Greedy similarity clustering — order-dependent grouping of near-duplicates.
//
// This is deliberately NOT transitive single-link clustering. Each
// unprocessed record seeds a cluster and makes a single pass over the
// remaining unprocessed records, pulling in everything whose similarity
// to the SEED meets the threshold. A record that would only join via a
// chain (A~B, B~C, but not A~C) stays out. Changing this to transitive
// closure would change observable groupings, so it stays as-is.
//
// Clustering compares title-only keywords, not title+description — one
// extraction per record keeps the quadratic pass cheap.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::similarity::{score_with_keywords, PAIRWISE_KEYWORDS};
use super::{keywords, validate_threshold};
use crate::records::VideoRecord;

/// A group of mutually-similar videos.
///
/// `id` is a synthetic display number assigned in creation order — it is
/// not stable across runs and means nothing beyond "cluster #3 in this
/// report".
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub id: u32,
    pub members: Vec<VideoRecord>,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Partition `corpus` into similarity clusters at the given threshold.
///
/// Every record lands in exactly one cluster; singletons are valid and
/// represent content with no sufficiently similar match. The returned
/// sequence is sorted by cluster size descending, stable, so equal-sized
/// clusters keep creation order.
pub fn cluster(corpus: &[VideoRecord], threshold: f64) -> Result<Vec<Cluster>> {
    validate_threshold(threshold)?;

    // One title-only keyword set per record, reused across the whole pass.
    let keyword_sets: Vec<Vec<String>> = corpus
        .iter()
        .map(|r| keywords::extract(&r.title, PAIRWISE_KEYWORDS))
        .collect();

    let mut processed = vec![false; corpus.len()];
    let mut clusters: Vec<Cluster> = Vec::new();

    for seed_idx in 0..corpus.len() {
        if processed[seed_idx] {
            continue;
        }
        processed[seed_idx] = true;

        let seed = &corpus[seed_idx];
        let mut members = vec![seed.clone()];

        // Single pass: every later unprocessed record is compared to the
        // seed only, never to the accumulated members.
        for other_idx in 0..corpus.len() {
            if processed[other_idx] {
                continue;
            }
            let result = score_with_keywords(
                seed,
                &corpus[other_idx],
                &keyword_sets[seed_idx],
                &keyword_sets[other_idx],
            );
            if result.combined_score >= threshold {
                processed[other_idx] = true;
                members.push(corpus[other_idx].clone());
            }
        }

        clusters.push(Cluster {
            id: clusters.len() as u32 + 1,
            members,
        });
    }

    // Largest groups first; stable sort keeps creation order among equals.
    clusters.sort_by_key(|c| std::cmp::Reverse(c.size()));

    debug!(
        records = corpus.len(),
        clusters = clusters.len(),
        threshold,
        "Clustering complete"
    );

    Ok(clusters)
}
