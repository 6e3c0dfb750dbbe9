//! TF-IDF vectorization over a corpus of space-joined token sequences.
//!
//! The pipeline is the classic three-pass shape: build a vocabulary honoring
//! the n-gram span and document-frequency bounds, count raw terms per
//! document against it, then reweight by smoothed inverse document
//! frequency and L2-normalize each row:
//!
//! ```text
//! idf(t) = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! The output always has exactly one row per corpus document; a vocabulary
//! emptied by aggressive pruning yields zero-width rows rather than an
//! error, and the caller enforces the row-count invariant.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

mod config;
mod matrix;

pub use crate::config::{DocFreq, VectorizeConfig};
pub use crate::matrix::FeatureMatrix;

/// Builds the vocabulary and computes the dense TF-IDF matrix for `corpus`.
pub fn fit_transform(corpus: &[String], cfg: &VectorizeConfig) -> FeatureMatrix {
    let start = Instant::now();
    let n_docs = corpus.len();

    let documents: Vec<Vec<String>> = corpus
        .iter()
        .map(|doc| ngrams(doc, cfg.ngram_range))
        .collect();

    // Document frequency over distinct terms per document.
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for terms in &documents {
        let distinct: HashSet<&str> = terms.iter().map(String::as_str).collect();
        for term in distinct {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    // Prune by document-frequency bounds, then fix the column order.
    let min_df = cfg.min_df.resolve(n_docs);
    let max_df = cfg.max_df.resolve(n_docs);
    let mut vocabulary: Vec<String> = doc_freq
        .iter()
        .filter(|(_, &df)| {
            let df = df as f64;
            df >= min_df && df <= max_df
        })
        .map(|(term, _)| term.to_string())
        .collect();
    vocabulary.sort_unstable();

    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(column, term)| (term.as_str(), column))
        .collect();

    // Smoothed IDF per column.
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = doc_freq[term.as_str()] as f64;
            ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    // Raw counts, IDF reweighting, L2 row normalization.
    let mut rows = Vec::with_capacity(n_docs);
    for terms in &documents {
        let mut row = vec![0.0_f64; vocabulary.len()];
        for term in terms {
            if let Some(&column) = index.get(term.as_str()) {
                row[column] += 1.0;
            }
        }
        for (value, weight) in row.iter_mut().zip(&idf) {
            *value *= weight;
        }
        let norm = row.iter().map(|value| value * value).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }
        rows.push(row);
    }

    let elapsed_micros = start.elapsed().as_micros();
    debug!(
        documents = n_docs,
        terms = vocabulary.len(),
        elapsed_micros,
        "tfidf matrix built"
    );
    FeatureMatrix { rows, vocabulary }
}

/// Lowercases, whitespace-splits, and expands `doc` into word n-grams for
/// every length in the inclusive `(lower, upper)` range. N-grams are
/// space-joined in source order.
fn ngrams(doc: &str, (lower, upper): (usize, usize)) -> Vec<String> {
    let words: Vec<String> = doc
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    // Clamp to the document length so an absurd upper bound costs nothing.
    let mut terms = Vec::new();
    for n in lower..=upper.min(words.len()) {
        if n == 0 {
            continue;
        }
        for window in words.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}
