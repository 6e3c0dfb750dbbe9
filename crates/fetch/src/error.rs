use thiserror::Error;

/// Errors produced while retrieving remote documents.
///
/// Only transport-level failures surface as errors. A response with a
/// non-200 status is reported as an empty body by [`crate::PageFetcher`],
/// never as an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed below the HTTP layer (DNS, connect, timeout)
    /// or the body could not be read.
    #[error("transport failure fetching {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure reported by a non-HTTP [`crate::PageFetcher`] implementation.
    #[error("fetch failed: {0}")]
    Other(String),
}
