/// Dense TF-IDF feature matrix: one row per corpus document, one column per
/// vocabulary term.
///
/// `vocabulary` holds the terms in column order (lexicographically sorted at
/// build time, so identical corpora always produce identical layouts).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub rows: Vec<Vec<f64>>,
    pub vocabulary: Vec<String>,
}

impl FeatureMatrix {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of `term`, if it survived vocabulary pruning.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.iter().position(|t| t.as_str() == term)
    }
}
