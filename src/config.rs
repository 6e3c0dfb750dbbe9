//! Process-level configuration for one pipeline run.
//!
//! Everything the run needs is threaded through [`PipelineConfig`]; there
//! is no ambient configuration state. The binary assembles one from CLI
//! arguments; tests build theirs directly.

use std::path::PathBuf;

use extract::ExtractConfig;
use segment::SegmentConfig;

/// Feed mined when no URL is supplied.
pub const DEFAULT_FEED_URL: &str =
    "https://news.google.com/rss?hl=zh-TW&gl=TW&ceid=TW:zh-Hant";

/// All options recognized by a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Local path of the feed document.
    pub feed_path: PathBuf,
    /// Output path for extracted document units, one per line.
    pub description_path: PathBuf,
    /// Output path for token sequences, space-joined, one per line.
    pub tokenized_path: PathBuf,
    /// Output path for TF-IDF rows ("text, vector" per line).
    pub feature_path: PathBuf,

    /// Re-download the feed from `feed_url` before processing.
    pub renew: bool,
    /// Remote feed location used by `renew`.
    pub feed_url: String,

    /// Tag-extraction options (target tag, link resolution).
    pub extract: ExtractConfig,
    /// Segmentation options (noise filtering).
    pub segment: SegmentConfig,

    /// Raw vectorizer parameter strings; malformed values fall back to the
    /// vectorizer defaults with a warning.
    pub ngram_range: Option<String>,
    pub min_df: Option<String>,
    pub max_df: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feed_path: PathBuf::from("news.rss"),
            description_path: PathBuf::from("description.txt"),
            tokenized_path: PathBuf::from("tokenized.txt"),
            feature_path: PathBuf::from("features.txt"),
            renew: false,
            feed_url: DEFAULT_FEED_URL.to_string(),
            extract: ExtractConfig::default(),
            segment: SegmentConfig::default(),
            ngram_range: None,
            min_df: None,
            max_df: None,
        }
    }
}
