// Unit tests for keyword extraction and the similarity scorer.
//
// Tests isolated pure functions: extract() contract edge cases, title
// ratio and Jaccard numerical edge cases, and the combined score blend.

use vidscout::analysis::keywords::extract;
use vidscout::analysis::similarity::{
    keyword_jaccard, score, title_ratio, KEYWORD_WEIGHT, TITLE_WEIGHT,
};
use vidscout::records::VideoRecord;

fn record(id: &str, title: &str, description: &str) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        metrics: Default::default(),
    }
}

// ============================================================
// extract — contract edge cases
// ============================================================

#[test]
fn extract_empty_text_is_empty_for_any_n() {
    for n in [0, 1, 10, 1000] {
        assert!(extract("", n).is_empty(), "n = {n}");
    }
}

#[test]
fn extract_zero_n_is_empty() {
    assert!(extract("minecraft speedrun minecraft", 0).is_empty());
}

#[test]
fn extract_is_idempotent() {
    let text = "Reddit Cheating Story | Wife's REVENGE (part 2)";
    let first = extract(text, 10);
    let second = extract(text, 10);
    assert_eq!(first, second);
}

#[test]
fn extract_lowercases_output() {
    let kw = extract("MINECRAFT Speedrun", 10);
    assert_eq!(kw, vec!["minecraft", "speedrun"]);
}

#[test]
fn extract_no_duplicates() {
    let kw = extract("bread bread bread baking baking", 10);
    let mut unique = kw.clone();
    unique.dedup();
    assert_eq!(kw, unique);
}

#[test]
fn extract_punctuation_and_digits_separate_tokens() {
    // "story,revenge" must split; "2024" must vanish entirely
    let kw = extract("story,revenge 2024 story-drama", 10);
    assert_eq!(kw, vec!["story", "revenge", "drama"]);
}

#[test]
fn extract_respects_top_n() {
    let kw = extract("alpha beta gamma delta epsilon", 3);
    assert_eq!(kw.len(), 3);
}

// ============================================================
// title_ratio — numerical edge cases
// ============================================================

#[test]
fn title_ratio_identical_nonempty_is_one() {
    for title in ["x", "Reddit Cheating Story", "日本語タイトル"] {
        let r = title_ratio(title, title);
        assert!((r - 1.0).abs() < 1e-9, "title '{title}' scored {r}");
    }
}

#[test]
fn title_ratio_two_empty_strings_is_zero() {
    // Structural guard: no division by zero, defined as 0.0
    assert_eq!(title_ratio("", ""), 0.0);
}

#[test]
fn title_ratio_one_empty_side_is_zero() {
    assert_eq!(title_ratio("anything", ""), 0.0);
    assert_eq!(title_ratio("", "anything"), 0.0);
}

#[test]
fn title_ratio_case_insensitive() {
    assert!((title_ratio("REDDIT STORY", "reddit story") - 1.0).abs() < 1e-9);
}

#[test]
fn title_ratio_bounded() {
    let pairs = [
        ("Reddit Cheating Story Part 1", "Reddit Cheating Story Part 2"),
        ("How to Bake Bread", "Minecraft Speedrun World Record"),
        ("a", "aaaaaaaaaaaaaaaa"),
    ];
    for (a, b) in pairs {
        let r = title_ratio(a, b);
        assert!((0.0..=1.0).contains(&r), "ratio({a}, {b}) = {r}");
    }
}

#[test]
fn title_ratio_counts_common_blocks() {
    // "abcd" vs "abxd": blocks "ab" + "d" = 3 matched, ratio 6/8
    let r = title_ratio("abcd", "abxd");
    assert!((r - 0.75).abs() < 1e-9, "got {r}");
}

// ============================================================
// keyword_jaccard — set semantics
// ============================================================

#[test]
fn jaccard_is_symmetric() {
    let a: Vec<String> = ["reddit", "cheating", "story"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let b: Vec<String> = ["cheating", "revenge"].iter().map(|s| s.to_string()).collect();
    assert!((keyword_jaccard(&a, &b) - keyword_jaccard(&b, &a)).abs() < 1e-12);
}

#[test]
fn jaccard_either_empty_is_zero() {
    let a: Vec<String> = vec!["reddit".to_string()];
    assert_eq!(keyword_jaccard(&a, &[]), 0.0);
    assert_eq!(keyword_jaccard(&[], &a), 0.0);
    assert_eq!(keyword_jaccard(&[], &[]), 0.0);
}

#[test]
fn jaccard_partial_overlap() {
    let a: Vec<String> = ["reddit", "cheating"].iter().map(|s| s.to_string()).collect();
    let b: Vec<String> = ["cheating", "revenge"].iter().map(|s| s.to_string()).collect();
    // intersection 1, union 3
    assert!((keyword_jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn jaccard_duplicates_collapse_to_sets() {
    let a: Vec<String> = ["story", "story", "story"].iter().map(|s| s.to_string()).collect();
    let b: Vec<String> = vec!["story".to_string()];
    assert!((keyword_jaccard(&a, &b) - 1.0).abs() < 1e-12);
}

// ============================================================
// score — the combined blend
// ============================================================

#[test]
fn weights_sum_to_one() {
    assert!((TITLE_WEIGHT + KEYWORD_WEIGHT - 1.0).abs() < 1e-12);
}

#[test]
fn score_self_title_similarity_is_one() {
    let a = record("1", "Reddit Cheating Story Part 1", "wife caught");
    let result = score(&a, &a);
    assert!((result.title_similarity - 1.0).abs() < 1e-9);
    assert!((result.combined_score - 1.0).abs() < 1e-9);
}

#[test]
fn score_combined_is_weighted_blend() {
    let a = record("1", "Reddit Cheating Story Part 1", "");
    let b = record("2", "Reddit Cheating Story Part 2", "");
    let result = score(&a, &b);
    let expected =
        TITLE_WEIGHT * result.title_similarity + KEYWORD_WEIGHT * result.keyword_similarity;
    assert!((result.combined_score - expected).abs() < 1e-12);
}

#[test]
fn score_unrelated_videos_is_low() {
    let a = record("1", "Reddit Cheating Story Part 1", "relationship drama");
    let b = record("2", "How to Bake Bread", "sourdough starter guide");
    let result = score(&a, &b);
    assert!(result.keyword_similarity == 0.0);
    assert!(result.combined_score < 0.35, "got {}", result.combined_score);
}

#[test]
fn score_carries_other_id() {
    let a = record("1", "One", "");
    let b = record("2", "Two", "");
    assert_eq!(score(&a, &b).other_id, "2");
}
