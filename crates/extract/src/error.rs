use thiserror::Error;

/// Errors that abort an extraction run.
///
/// Per-link fetch and markup failures are recoverable and never reach this
/// type; only a feed document that cannot be parsed as a tree is fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The feed document is not well-formed XML.
    #[error("feed document could not be parsed: {0}")]
    ParseFeed(#[from] roxmltree::Error),
}
