use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use vidscout::analysis;
use vidscout::config::Config;
use vidscout::output::{csv, terminal};
use vidscout::pipeline::research::{self, ResearchHit, ResearchParams};
use vidscout::records::VideoRecord;
use vidscout::youtube::client::YouTubeClient;

/// Vidscout: YouTube channel research.
///
/// Searches for recent videos matching your keywords, filters by channel
/// size and age to surface emerging creators, and analyzes the results for
/// near-duplicate content and trending topics.
#[derive(Parser)]
#[command(name = "vidscout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Search flags shared by every subcommand.
#[derive(Args, Clone)]
struct SweepArgs {
    /// Keywords to search (repeat the flag for multiple)
    #[arg(long = "keyword", short = 'k', required = true)]
    keywords: Vec<String>,

    /// Only videos uploaded within this many days
    #[arg(long, default_value = "30")]
    days: u32,

    /// Minimum channel subscriber count
    #[arg(long, default_value = "0")]
    min_subs: u64,

    /// Maximum channel subscriber count
    #[arg(long)]
    max_subs: Option<u64>,

    /// Only channels created within this many days
    #[arg(long)]
    channel_age_days: Option<i64>,

    /// Max results per keyword (API cap: 50)
    #[arg(long, default_value = "10")]
    max_results: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter, then display (and optionally export) the results
    Search {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Sort order for the result table
        #[arg(long, value_enum, default_value = "views")]
        sort: SortBy,

        /// Write the results to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Search, then group near-duplicate videos by similarity
    Cluster {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Minimum combined similarity for two videos to group together
        #[arg(long, default_value = "0.35")]
        threshold: f64,

        /// Print the clusters as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search, then rank every result against one target video
    Similar {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Video id of the target (must appear in the search results)
        #[arg(long)]
        target: String,

        /// Minimum combined similarity to report
        #[arg(long, default_value = "0.3")]
        threshold: f64,

        /// Print the ranked results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search, then surface keywords repeated across the results
    Trends {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Minimum occurrence count for a term to be a trend
        #[arg(long, default_value = "2")]
        min_occurrence: usize,

        /// Print the trend list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortBy {
    /// Views, high to low
    Views,
    /// Subscribers, low to high (smallest channels first)
    Subscribers,
    /// Channel age, newest first
    Age,
    /// Published date, most recent first
    Published,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vidscout=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { sweep, sort, csv: csv_path } => {
            let mut hits = run_sweep(&sweep).await?;
            sort_hits(&mut hits, sort);
            terminal::display_hits(&hits);

            if let Some(path) = csv_path {
                csv::export_hits(&hits, &path)?;
                println!("{}", format!("Exported {} rows to {}", hits.len(), path.display()).green());
            }
        }

        Commands::Cluster { sweep, threshold, json } => {
            let hits = run_sweep(&sweep).await?;
            let corpus = to_corpus(&hits);
            let clusters = analysis::cluster(&corpus, threshold)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&clusters)?);
            } else {
                terminal::display_clusters(&clusters, threshold);
            }
        }

        Commands::Similar { sweep, target, threshold, json } => {
            let hits = run_sweep(&sweep).await?;
            let corpus = to_corpus(&hits);

            let Some(target_record) = corpus.iter().find(|r| r.id == target) else {
                anyhow::bail!(
                    "Target video '{target}' is not in the search results.\n\
                     Run `vidscout search` with the same flags to list result ids."
                );
            };

            let results = analysis::find_similar(target_record, &corpus, threshold)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                terminal::display_similar(&target_record.title, &results);
            }
        }

        Commands::Trends { sweep, min_occurrence, json } => {
            let hits = run_sweep(&sweep).await?;
            let corpus = to_corpus(&hits);
            let trends = analysis::detect_trends(&corpus, min_occurrence);
            if json {
                println!("{}", serde_json::to_string_pretty(&trends)?);
            } else {
                terminal::display_trends(&trends, min_occurrence);
            }
        }
    }

    Ok(())
}

/// Build the client from config and run the research sweep.
async fn run_sweep(args: &SweepArgs) -> Result<Vec<ResearchHit>> {
    let config = Config::load()?;
    config.require_api_key()?;

    let client = YouTubeClient::new(&config.api_url, &config.api_key)?;
    let params = ResearchParams {
        keywords: args.keywords.clone(),
        published_within_days: args.days,
        min_subscribers: args.min_subs,
        max_subscribers: args.max_subs,
        max_channel_age_days: args.channel_age_days,
        max_results_per_keyword: args.max_results,
    };

    info!(keywords = params.keywords.len(), days = params.published_within_days, "Starting sweep");
    research::run(&client, &params).await
}

/// Clone the video records out of the hits for the analysis core.
fn to_corpus(hits: &[ResearchHit]) -> Vec<VideoRecord> {
    hits.iter().map(|h| h.video.clone()).collect()
}

fn sort_hits(hits: &mut [ResearchHit], sort: SortBy) {
    match sort {
        SortBy::Views => hits.sort_by_key(|h| std::cmp::Reverse(h.video.metrics.views)),
        SortBy::Subscribers => hits.sort_by_key(|h| h.video.metrics.subscribers),
        SortBy::Age => hits.sort_by_key(|h| h.channel_age_days.unwrap_or(i64::MAX)),
        SortBy::Published => {
            hits.sort_by_key(|h| std::cmp::Reverse(h.published_at));
        }
    }
}
