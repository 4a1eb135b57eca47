// Keyword extraction — frequency-ranked salient terms from free text.
//
// Deliberately simple: lowercase, split into alphabetic runs, drop short
// tokens and stop words, count, rank. No TF-IDF here — a research sweep
// compares dozens of short titles, not long documents, so raw frequency
// with a good stop list is the right tool.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use stop_words::{get, LANGUAGE};

/// Tokens this short are never keywords ("how", "the", "vs", ...).
pub const MIN_TOKEN_LEN: usize = 4;

/// Platform noise words filtered on top of the English stop list.
/// These show up in nearly every title and carry no topical signal.
pub const NOISE_WORDS: &[&str] = &[
    "video", "videos", "shorts", "official", "subscribe", "channel", "watch",
];

fn stop_set() -> &'static HashSet<String> {
    static SET: OnceLock<HashSet<String>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        set.extend(NOISE_WORDS.iter().map(|w| (*w).to_string()));
        set
    })
}

/// Extract the `top_n` most frequent salient terms from `text`.
///
/// Tokens are maximal runs of alphabetic characters — digits, punctuation,
/// and symbols act as separators, never as token content. Ranking is by
/// frequency descending; ties keep first-occurrence order (stable sort).
/// Empty or all-stopword text yields an empty vec, not an error.
pub fn extract(text: &str, top_n: usize) -> Vec<String> {
    if top_n == 0 || text.is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    let stops = stop_set();

    // Count frequencies while remembering first-occurrence order.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in lower.split(|c: char| !c.is_alphabetic()) {
        if token.chars().count() < MIN_TOKEN_LEN {
            continue;
        }
        if stops.contains(token) {
            continue;
        }
        let entry = counts.entry(token).or_insert(0);
        if *entry == 0 {
            order.push(token);
        }
        *entry += 1;
    }

    // Stable sort on frequency descending preserves first-occurrence order
    // among equal counts.
    order.sort_by_key(|t| std::cmp::Reverse(counts[t]));
    order.truncate(top_n);

    order.into_iter().map(String::from).collect()
}
