//! Vectorizer parameters and their lenient CLI-string parsing.
//!
//! Every parameter arrives as an optional raw string from the command line.
//! A malformed value is never fatal: it is logged at WARN and that one
//! parameter falls back to its unconstrained default, leaving the others
//! untouched.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A document-frequency bound: either an absolute document count or a
/// fraction of the corpus size (clamped to `[0, 1]`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DocFreq {
    Count(usize),
    Fraction(f64),
}

impl DocFreq {
    /// Resolves the bound to an absolute (possibly fractional) document
    /// count for a corpus of `n_docs` documents.
    pub(crate) fn resolve(&self, n_docs: usize) -> f64 {
        match self {
            DocFreq::Count(count) => *count as f64,
            DocFreq::Fraction(fraction) => fraction * n_docs as f64,
        }
    }
}

/// Configuration for [`crate::fit_transform`].
///
/// Defaults are unconstrained: unigrams only, `min_df` of one document,
/// `max_df` of the whole corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorizeConfig {
    /// Inclusive `(lower, upper)` span of word n-gram lengths.
    pub ngram_range: (usize, usize),
    /// Terms in fewer documents than this are pruned from the vocabulary.
    pub min_df: DocFreq,
    /// Terms in more documents than this are pruned from the vocabulary.
    pub max_df: DocFreq,
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            ngram_range: (1, 1),
            min_df: DocFreq::Count(1),
            max_df: DocFreq::Fraction(1.0),
        }
    }
}

impl VectorizeConfig {
    /// Builds a config from raw option strings.
    ///
    /// `ngram_range` is two comma-separated positive integers with
    /// `lower <= upper` (e.g. `"1,2"`); `min_df`/`max_df` are either a
    /// non-negative integer count or a float taken as a corpus fraction.
    /// Each malformed value warns and keeps its default.
    pub fn from_args(
        ngram_range: Option<&str>,
        min_df: Option<&str>,
        max_df: Option<&str>,
    ) -> Self {
        let mut cfg = Self::default();

        if let Some(raw) = ngram_range {
            match parse_ngram_range(raw) {
                Some(range) => cfg.ngram_range = range,
                None => warn!(raw, "malformed ngram_range, using default"),
            }
        }
        if let Some(raw) = min_df {
            match parse_doc_freq(raw) {
                Some(bound) => cfg.min_df = bound,
                None => warn!(raw, "malformed min_df, using default"),
            }
        }
        if let Some(raw) = max_df {
            match parse_doc_freq(raw) {
                Some(bound) => cfg.max_df = bound,
                None => warn!(raw, "malformed max_df, using default"),
            }
        }

        cfg
    }
}

fn parse_ngram_range(raw: &str) -> Option<(usize, usize)> {
    let (lower, upper) = raw.split_once(',')?;
    let lower: usize = lower.trim().parse().ok()?;
    let upper: usize = upper.trim().parse().ok()?;
    (lower >= 1 && lower <= upper).then_some((lower, upper))
}

fn parse_doc_freq(raw: &str) -> Option<DocFreq> {
    let raw = raw.trim();
    if let Ok(count) = raw.parse::<usize>() {
        return Some(DocFreq::Count(count));
    }
    raw.parse::<f64>()
        .ok()
        .filter(|fraction| fraction.is_finite() && *fraction >= 0.0)
        .map(|fraction| DocFreq::Fraction(fraction.clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained() {
        let cfg = VectorizeConfig::default();
        assert_eq!(cfg.ngram_range, (1, 1));
        assert_eq!(cfg.min_df, DocFreq::Count(1));
        assert_eq!(cfg.max_df, DocFreq::Fraction(1.0));
    }

    #[test]
    fn well_formed_args_are_applied() {
        let cfg = VectorizeConfig::from_args(Some("1, 2"), Some("2"), Some("0.8"));
        assert_eq!(cfg.ngram_range, (1, 2));
        assert_eq!(cfg.min_df, DocFreq::Count(2));
        assert_eq!(cfg.max_df, DocFreq::Fraction(0.8));
    }

    #[test]
    fn malformed_ngram_range_falls_back_alone() {
        let cfg = VectorizeConfig::from_args(Some("abc"), Some("2"), None);
        assert_eq!(cfg.ngram_range, (1, 1));
        assert_eq!(cfg.min_df, DocFreq::Count(2));
    }

    #[test]
    fn inverted_or_zero_ngram_range_is_rejected() {
        assert_eq!(
            VectorizeConfig::from_args(Some("3,2"), None, None).ngram_range,
            (1, 1)
        );
        assert_eq!(
            VectorizeConfig::from_args(Some("0,2"), None, None).ngram_range,
            (1, 1)
        );
    }

    #[test]
    fn fractions_are_clamped_to_unit_interval() {
        let cfg = VectorizeConfig::from_args(None, None, Some("1.5"));
        assert_eq!(cfg.max_df, DocFreq::Fraction(1.0));
    }

    #[test]
    fn negative_or_non_numeric_doc_freq_is_rejected() {
        let cfg = VectorizeConfig::from_args(None, Some("-0.5"), Some("lots"));
        assert_eq!(cfg.min_df, DocFreq::Count(1));
        assert_eq!(cfg.max_df, DocFreq::Fraction(1.0));
    }
}
