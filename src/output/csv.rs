// CSV export of research hits.
//
// Hand-rolled RFC 4180-style writer: fields containing commas, quotes, or
// newlines are quoted, embedded quotes doubled. Video titles contain all
// three regularly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::research::ResearchHit;

const HEADER: &str = "Keyword,Video Title,Channel Name,Subscribers,Views,Likes,Comments,\
Channel Age (Days),Published,Video URL,Channel URL";

/// Write the research hits to `path` as CSV.
pub fn export_hits(hits: &[ResearchHit], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file at {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{HEADER}")?;

    for hit in hits {
        let age = hit
            .channel_age_days
            .map(|d| d.to_string())
            .unwrap_or_default();
        let published = hit
            .published_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{}",
            escape(&hit.keyword),
            escape(&hit.video.title),
            escape(&hit.channel_name),
            hit.video.metrics.subscribers,
            hit.video.metrics.views,
            hit.video.metrics.likes,
            hit.video.metrics.comments,
            age,
            published,
            hit.video.url(),
            hit.channel_url(),
        )?;
    }

    out.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_unquoted() {
        assert_eq!(escape("reddit stories"), "reddit stories");
    }

    #[test]
    fn test_comma_field_quoted() {
        assert_eq!(escape("part 1, part 2"), "\"part 1, part 2\"");
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        assert_eq!(escape("he said \"no\""), "\"he said \"\"no\"\"\"");
    }

    #[test]
    fn test_newline_field_quoted() {
        assert_eq!(escape("line1\nline2"), "\"line1\nline2\"");
    }
}
