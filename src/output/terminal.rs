// Colored terminal output for research hits, clusters, and trend lists.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs display paths delegate here.

use colored::Colorize;

use crate::analysis::cluster::Cluster;
use crate::analysis::similarity::SimilarityResult;
use crate::analysis::trends::TrendEntry;
use crate::pipeline::research::ResearchHit;

/// Display the filtered research hits as a ranked table.
pub fn display_hits(hits: &[ResearchHit]) {
    if hits.is_empty() {
        println!("No results found. Try widening the filters or the time window.");
        return;
    }

    let unique_channels = {
        let mut names: Vec<&str> = hits.iter().map(|h| h.channel_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    };

    println!(
        "\n{}",
        format!(
            "=== Research Results ({} videos, {} channels) ===",
            hits.len(),
            unique_channels
        )
        .bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<52} {:>9}  {:>7}  {:>8}  {:<20}",
        "Rank".dimmed(),
        "Title".dimmed(),
        "Views".dimmed(),
        "Subs".dimmed(),
        "Ch. age".dimmed(),
        "Keyword".dimmed(),
    );
    println!("  {}", "-".repeat(108).dimmed());

    for (i, hit) in hits.iter().enumerate() {
        let age = hit
            .channel_age_days
            .map(|d| format!("{d}d"))
            .unwrap_or_else(|| "?".to_string());

        println!(
            "  {:>4}. {:<52} {:>9}  {:>7}  {:>8}  {:<20}",
            i + 1,
            truncate(&hit.video.title, 52),
            hit.video.metrics.views,
            hit.video.metrics.subscribers,
            age,
            truncate(&hit.keyword, 20),
        );
    }

    // Summary
    let total_views: u64 = hits.iter().map(|h| h.video.metrics.views).sum();
    println!();
    println!("  Total views across results: {}", total_views);
}

/// Display cluster groupings, largest first.
pub fn display_clusters(clusters: &[Cluster], threshold: f64) {
    if clusters.is_empty() {
        println!("Nothing to cluster.");
        return;
    }

    let multi = clusters.iter().filter(|c| c.size() > 1).count();
    println!(
        "\n{}",
        format!(
            "=== Clusters ({} groups, {} with 2+ videos, threshold {:.2}) ===",
            clusters.len(),
            multi,
            threshold
        )
        .bold()
    );

    for cluster in clusters {
        println!();
        let header = format!("Cluster #{} ({} videos)", cluster.id, cluster.size());
        if cluster.size() > 1 {
            println!("  {}", header.green().bold());
        } else {
            println!("  {}", header.dimmed());
        }
        for member in &cluster.members {
            println!(
                "    {:<60} {}",
                truncate(&member.title, 60),
                member.url().dimmed()
            );
        }
    }
    println!();
}

/// Display a ranked similarity list for one target video.
pub fn display_similar(target_title: &str, results: &[SimilarityResult]) {
    println!(
        "\n{}",
        format!("=== Videos similar to \"{}\" ===", truncate(target_title, 60)).bold()
    );

    if results.is_empty() {
        println!("  No videos above the threshold.");
        return;
    }

    println!();
    println!(
        "  {:>4}  {:<16} {:>9}  {:>7}  {:>9}",
        "Rank".dimmed(),
        "Video".dimmed(),
        "Combined".dimmed(),
        "Title".dimmed(),
        "Keywords".dimmed(),
    );
    for (i, r) in results.iter().enumerate() {
        println!(
            "  {:>4}. {:<16} {:>9.3}  {:>7.3}  {:>9.3}",
            i + 1,
            r.other_id,
            r.combined_score,
            r.title_similarity,
            r.keyword_similarity,
        );
    }
    println!();
}

/// Display trending terms with a simple occurrence bar.
pub fn display_trends(trends: &[TrendEntry], min_occurrence: usize) {
    println!(
        "\n{}",
        format!("=== Trending terms (seen {}+ times) ===", min_occurrence).bold()
    );

    if trends.is_empty() {
        println!("  No repeated terms in this corpus.");
        return;
    }

    println!();
    for entry in trends {
        let bar = "#".repeat(entry.occurrence_count.min(40));
        println!(
            "  {:<24} {:>4}  {}",
            entry.term,
            entry.occurrence_count,
            bar.yellow()
        );
    }
    println!();
}

/// Truncate a string to `max` characters, appending an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
