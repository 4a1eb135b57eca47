// Pairwise video similarity — title string ratio blended with keyword overlap.
//
// Two independent signals:
//   - title_similarity: Ratcliff/Obershelp sequence ratio over lowercased
//     title characters — 2 * matched / (len_a + len_b), where `matched` is
//     the total length of recursively-found longest common blocks.
//   - keyword_similarity: plain Jaccard over the two records' keyword sets.
// The blend is 60/40 in favor of the title signal: titles are curated,
// descriptions are full of boilerplate.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::keywords;
use crate::records::VideoRecord;

/// Weight of the title string ratio in the combined score.
pub const TITLE_WEIGHT: f64 = 0.6;
/// Weight of the keyword Jaccard index in the combined score.
pub const KEYWORD_WEIGHT: f64 = 0.4;
/// How many keywords to extract per record for pairwise comparison.
pub const PAIRWISE_KEYWORDS: usize = 10;

/// Similarity between one video and another, all components in [0, 1].
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult {
    pub other_id: String,
    pub title_similarity: f64,
    pub keyword_similarity: f64,
    pub combined_score: f64,
}

/// Score two records using title+description keywords on both sides.
///
/// Callers are responsible for never passing the same record twice —
/// self-pairs are excluded by id at every call site.
pub fn score(a: &VideoRecord, b: &VideoRecord) -> SimilarityResult {
    let kw_a = keywords::extract(&a.full_text(), PAIRWISE_KEYWORDS);
    let kw_b = keywords::extract(&b.full_text(), PAIRWISE_KEYWORDS);
    score_with_keywords(a, b, &kw_a, &kw_b)
}

/// Score two records against pre-extracted keyword sets.
///
/// The pipeline paths extract keywords once per record and reuse them for
/// every pairwise comparison, so the quadratic loop only pays for string
/// matching.
pub fn score_with_keywords(
    a: &VideoRecord,
    b: &VideoRecord,
    kw_a: &[String],
    kw_b: &[String],
) -> SimilarityResult {
    let title_similarity = title_ratio(&a.title, &b.title);
    let keyword_similarity = keyword_jaccard(kw_a, kw_b);
    SimilarityResult {
        other_id: b.id.clone(),
        title_similarity,
        keyword_similarity,
        combined_score: TITLE_WEIGHT * title_similarity + KEYWORD_WEIGHT * keyword_similarity,
    }
}

/// Jaccard index between two keyword lists treated as sets.
///
/// Defined as 0.0 when either side is empty — an empty keyword set tells
/// us nothing, so it never counts as a perfect match against another
/// empty set.
pub fn keyword_jaccard(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Ratcliff/Obershelp ratio between two lowercased strings.
///
/// 1.0 means identical, 0.0 means no common block structure. Two empty
/// strings are defined as 0.0 — there is nothing to match.
pub fn title_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let matched = matching_total(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total length of matching blocks: find the longest common block, then
/// recurse into the unmatched regions on either side of it.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    // Explicit work stack of (a_lo, a_hi, b_lo, b_hi) half-open ranges.
    let mut stack = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = stack.pop() {
        let (i, j, k) = longest_block(a, b, a_lo, a_hi, b_lo, b_hi);
        if k == 0 {
            continue;
        }
        matched += k;
        stack.push((a_lo, i, b_lo, j));
        stack.push((i + k, a_hi, j + k, b_hi));
    }

    matched
}

/// Longest contiguous matching block within the given ranges.
///
/// Returns (start_a, start_b, length); ties resolve to the earliest start
/// in `a`, then the earliest in `b`, which keeps the ratio deterministic.
fn longest_block(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let mut best = (a_lo, b_lo, 0);
    // run_len[j] = length of the match ending at (i-1, j-1)
    let mut run_len: HashMap<usize, usize> = HashMap::new();

    for i in a_lo..a_hi {
        let mut next_run: HashMap<usize, usize> = HashMap::new();
        for j in b_lo..b_hi {
            if a[i] == b[j] {
                let k = if j > b_lo {
                    run_len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_run.insert(j, k);
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        run_len = next_run;
    }

    best
}
