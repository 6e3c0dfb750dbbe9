use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, Level};

use feedmine::{
    run_pipeline, ExtractConfig, HttpFetcher, PipelineConfig, SegmentConfig, DEFAULT_FEED_URL,
};

/// Mine an RSS feed into description, tokenized, and TF-IDF text files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The feed file path
    #[arg(short, long, default_value = "news.rss")]
    input: PathBuf,

    /// The description file path
    #[arg(short, long, default_value = "description.txt")]
    description: PathBuf,

    /// The tokenized result file path
    #[arg(short, long, default_value = "tokenized.txt")]
    output: PathBuf,

    /// The TF-IDF result file path
    #[arg(short = 't', long, default_value = "features.txt")]
    tfidf: PathBuf,

    /// Renew the feed file from the feed URL before processing
    #[arg(short, long)]
    renew: bool,

    /// The feed URL
    #[arg(short, long, default_value = DEFAULT_FEED_URL)]
    url: String,

    /// Download pages linked from each description instead of the
    /// description text itself
    #[arg(short = 'D', long)]
    download: bool,

    /// Filter invalid words out of the tokenized output
    #[arg(short, long)]
    filter: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log: String,

    /// N-gram range as "lower,upper", e.g. "1,2"
    #[arg(long)]
    ngram_range: Option<String>,

    /// Minimum document frequency: integer count or fraction in [0,1]
    #[arg(long)]
    min_df: Option<String>,

    /// Maximum document frequency: integer count or fraction in [0,1]
    #[arg(long)]
    max_df: Option<String>,
}

fn log_level(raw: &str) -> Level {
    match raw.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" | "critical" | "fatal" => Level::ERROR,
        // Unrecognized levels fall back to the WARN default.
        _ => Level::WARN,
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(&cli.log))
        .init();

    let cfg = PipelineConfig {
        feed_path: cli.input,
        description_path: cli.description,
        tokenized_path: cli.output,
        feature_path: cli.tfidf,
        renew: cli.renew,
        feed_url: cli.url,
        extract: ExtractConfig {
            resolve_links: cli.download,
            ..ExtractConfig::default()
        },
        segment: SegmentConfig {
            filter_invalid: cli.filter,
        },
        ngram_range: cli.ngram_range,
        min_df: cli.min_df,
        max_df: cli.max_df,
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!(error = %err, "failed to build HTTP client");
            println!("{err}");
            return;
        }
    };

    // Fatal paths log the error (duplicated to stdout) and exit quietly
    // with code 0; no traceback ever reaches the user.
    match run_pipeline(&cfg, &fetcher) {
        Ok(summary) => info!(
            units = summary.units,
            rows = summary.matrix_shape.0,
            columns = summary.matrix_shape.1,
            "done"
        ),
        Err(err) => {
            error!(error = %err, "pipeline terminated early");
            println!("{err}");
        }
    }
}
