//! Offline RSS feature-extraction pipeline.
//!
//! One run fetches (optionally) and reads a feed document, extracts the
//! text of every `description` node, segments each unit into tokens,
//! and turns the token lines into a dense TF-IDF matrix. Three flat text
//! artifacts are written along the way: the description file, the tokenized
//! file, and the feature file.
//!
//! The stages live in their own crates and are re-exported here;
//! [`run_pipeline`] wires them together sequentially. Network access goes
//! through the injected [`fetch::PageFetcher`], so the whole pipeline runs
//! offline under test.

use std::fmt::Display;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

mod config;

pub use crate::config::{PipelineConfig, DEFAULT_FEED_URL};
pub use extract::{extract_tag_content, ExtractConfig, ExtractError};
pub use fetch::{extract_links, FetchError, HttpFetcher, PageFetcher};
pub use segment::{is_valid_word, segment_units, SegmentConfig};
pub use vectorize::{fit_transform, DocFreq, FeatureMatrix, VectorizeConfig};

/// Structural failures that terminate a run before its remaining artifacts
/// are produced.
///
/// Everything else (individual link fetches, malformed vectorizer
/// parameters, output write failures) is handled in place with a log entry
/// and never reaches this type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// The feed file is absent; nothing to process.
    #[error("{} not exists, please check or renew the feed file", .0.display())]
    MissingInput(PathBuf),

    /// The feed file exists but could not be read.
    #[error("failed to read feed file {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feed document is not a well-formed tree.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The vectorizer produced a different number of rows than the corpus
    /// has documents. Integrity violation; the feature file is not written.
    #[error("corpus/feature-matrix length mismatch: {corpus} documents, {rows} rows")]
    RowCountMismatch { corpus: usize, rows: usize },
}

/// Counts reported by a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub units: usize,
    pub sequences: usize,
    pub matrix_shape: (usize, usize),
}

/// Runs the full pipeline described by `cfg`.
///
/// Output files are written as their stage completes; a write failure is
/// logged and the run continues, since the remaining artifacts do not
/// depend on the failed one.
pub fn run_pipeline(
    cfg: &PipelineConfig,
    fetcher: &dyn PageFetcher,
) -> Result<PipelineSummary, PipelineError> {
    if cfg.renew {
        info!(url = %cfg.feed_url, "renewing feed file");
        renew_feed(cfg, fetcher);
    }

    if !cfg.feed_path.exists() {
        return Err(PipelineError::MissingInput(cfg.feed_path.clone()));
    }
    let xml = fs::read_to_string(&cfg.feed_path).map_err(|source| PipelineError::ReadInput {
        path: cfg.feed_path.clone(),
        source,
    })?;

    info!("extracting tag contents from feed");
    let units = extract_tag_content(&xml, &cfg.extract, fetcher)?;
    info!(units = units.len(), "extracted tag contents");
    write_lines(&cfg.description_path, units.iter(), "description");

    info!(filter_invalid = cfg.segment.filter_invalid, "segmenting contents");
    let sequences = segment_units(&units, &cfg.segment);
    info!(sequences = sequences.len(), "segmented contents");
    let token_lines: Vec<String> = sequences.iter().map(|tokens| tokens.join(" ")).collect();
    write_lines(&cfg.tokenized_path, token_lines.iter(), "tokenized");

    info!("computing TF-IDF matrix");
    let vectorize_cfg = VectorizeConfig::from_args(
        cfg.ngram_range.as_deref(),
        cfg.min_df.as_deref(),
        cfg.max_df.as_deref(),
    );
    let matrix = fit_transform(&token_lines, &vectorize_cfg);
    if matrix.row_count() != token_lines.len() {
        return Err(PipelineError::RowCountMismatch {
            corpus: token_lines.len(),
            rows: matrix.row_count(),
        });
    }

    let feature_lines = token_lines
        .iter()
        .zip(&matrix.rows)
        .map(|(line, row)| format!("{line}, {row:?}"));
    write_lines(&cfg.feature_path, feature_lines, "feature");

    let summary = PipelineSummary {
        units: units.len(),
        sequences: sequences.len(),
        matrix_shape: (matrix.row_count(), matrix.column_count()),
    };
    info!(
        units = summary.units,
        rows = summary.matrix_shape.0,
        columns = summary.matrix_shape.1,
        "pipeline run complete"
    );
    Ok(summary)
}

/// Downloads the feed to `cfg.feed_path`. Failure is logged, never fatal:
/// the missing-file check below decides whether the run can proceed.
fn renew_feed(cfg: &PipelineConfig, fetcher: &dyn PageFetcher) {
    match fetcher.fetch_text(&cfg.feed_url) {
        Ok(body) if !body.is_empty() => {
            if let Err(err) = fs::write(&cfg.feed_path, body) {
                error!(
                    path = %cfg.feed_path.display(),
                    error = %err,
                    "failed to write renewed feed"
                );
            }
        }
        Ok(_) => error!(url = %cfg.feed_url, "feed download returned no content"),
        Err(err) => error!(url = %cfg.feed_url, error = %err, "feed download failed"),
    }
}

/// Writes one item per line, newline-terminated, no escaping. I/O failure
/// is logged and swallowed; later stages do not depend on earlier files.
fn write_lines<I, T>(path: &Path, lines: I, label: &str)
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let result = (|| -> std::io::Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    })();

    match result {
        Ok(()) => info!(path = %path.display(), "wrote {label} file"),
        Err(err) => warn!(
            path = %path.display(),
            error = %err,
            "failed to write {label} file, continuing"
        ),
    }
}
