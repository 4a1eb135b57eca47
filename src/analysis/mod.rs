// Analysis core — pure, synchronous, in-memory.
//
// Everything in this module operates on a fully-materialized slice of
// VideoRecords and returns freshly-computed results. No I/O, no caching
// across calls, no shared state. Complexity is quadratic in corpus size,
// which is fine for the tens-to-hundreds of records a research sweep yields.

pub mod cluster;
pub mod keywords;
pub mod related;
pub mod similarity;
pub mod trends;

pub use cluster::{cluster, Cluster};
pub use keywords::extract;
pub use related::find_similar;
pub use similarity::{score, SimilarityResult};
pub use trends::{detect_trends, TrendEntry};

/// Thresholds come straight from CLI flags — reject anything outside the
/// score range (NaN included) before running a quadratic pass.
pub(crate) fn validate_threshold(threshold: f64) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("similarity threshold must be within 0.0..=1.0, got {threshold}");
    }
    Ok(())
}
