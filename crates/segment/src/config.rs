use serde::{Deserialize, Serialize};

/// Configuration for the segmentation stage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentConfig {
    /// If true, tokens rejected by [`crate::is_valid_word`] are dropped
    /// from every sequence. Off by default; the raw jieba output (which
    /// includes whitespace and punctuation tokens) is kept as-is.
    pub filter_invalid: bool,
}
