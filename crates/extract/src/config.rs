use serde::{Deserialize, Serialize};

/// Configuration for the tag extractor.
///
/// # Examples
///
/// ```rust
/// use extract::ExtractConfig;
///
/// let cfg = ExtractConfig::default();
/// assert_eq!(cfg.target_tag, "description");
/// assert!(!cfg.resolve_links);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Tag name whose text is harvested. Matched nodes are never expanded
    /// into their own children.
    pub target_tag: String,

    /// If true, anchor links found inside a matched node's text are fetched
    /// and their page contents replace the node's own text. Nodes without
    /// anchors fall back to their raw text.
    pub resolve_links: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            target_tag: "description".to_string(),
            resolve_links: false,
        }
    }
}
