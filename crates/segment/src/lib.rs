//! Word segmentation for languages without whitespace-delimited words.
//!
//! Each document unit is cut into an ordered token sequence with jieba
//! (HMM enabled), which handles mixed CJK/Latin/numeric text and is
//! deterministic for identical input. The dictionary is embedded in the
//! binary and loaded once into a process-wide [`OnceLock`], so segmentation
//! itself cannot fail at runtime.
//!
//! The optional validity filter reproduces the pipeline's noise policy:
//! single ASCII punctuation/symbol characters and a small fixed stop list
//! are dropped, everything else is kept.

use std::sync::OnceLock;
use std::time::Instant;

use jieba_rs::Jieba;
use tracing::debug;

mod config;

pub use crate::config::SegmentConfig;

/// Multi-character noise tokens that are never valid, plus the full-width
/// comma, which the length-one rule alone would admit.
const STOP_WORDS: [&str; 2] = ["__", "\u{ff0c}"];

static JIEBA: OnceLock<Jieba> = OnceLock::new();

fn jieba() -> &'static Jieba {
    JIEBA.get_or_init(Jieba::new)
}

/// Segments each document unit into an ordered token sequence.
///
/// Output order matches input order one-to-one; a sequence may be empty
/// when its unit was empty or filtering removed every token.
pub fn segment_units(units: &[String], cfg: &SegmentConfig) -> Vec<Vec<String>> {
    let start = Instant::now();
    let segmenter = jieba();

    let mut sequences = Vec::with_capacity(units.len());
    for unit in units {
        let mut tokens: Vec<String> = segmenter
            .cut(unit, true)
            .into_iter()
            .map(str::to_string)
            .collect();
        if cfg.filter_invalid {
            tokens.retain(|token| is_valid_word(token));
        }
        sequences.push(tokens);
    }

    let elapsed_micros = start.elapsed().as_micros();
    debug!(
        units = units.len(),
        filter_invalid = cfg.filter_invalid,
        elapsed_micros,
        "segmentation complete"
    );
    sequences
}

/// Noise-token policy for segmented output.
///
/// A token is valid unless it is on the stop list, empty, or a single
/// character that is neither ASCII alphanumeric nor multi-byte. Any single
/// character above the ASCII range is presumed meaningful.
pub fn is_valid_word(word: &str) -> bool {
    if STOP_WORDS.contains(&word) {
        return false;
    }
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(ch), None) => ch.is_ascii_alphanumeric() || (ch as u32) > 127,
        (Some(_), Some(_)) => true,
    }
}
