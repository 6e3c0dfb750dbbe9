//! Blocking document retrieval and anchor-link extraction.
//!
//! This crate is the I/O seam of the feedmine pipeline. [`PageFetcher`] is
//! the trait the tag extractor consumes when resolving links inside feed
//! entries; [`HttpFetcher`] is the production implementation backed by a
//! blocking `reqwest` client. Tests substitute their own `PageFetcher`
//! implementations so nothing above this crate ever touches the network.
//!
//! Fetch semantics follow the pipeline's sequential resource model: every
//! call blocks until the response arrives or the transport fails, and a
//! non-200 status is an *empty body*, not an error. Only transport-level
//! failures (DNS, connect, timeout) surface as [`FetchError`].

use std::time::{Duration, Instant};

use tracing::debug;

mod error;
mod links;

pub use crate::error::FetchError;
pub use crate::links::extract_links;

/// Default request timeout for [`HttpFetcher`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves the textual body of a URL.
pub trait PageFetcher {
    /// Fetches `url` and returns its body.
    ///
    /// Returns an empty string for any non-200 response; errors are
    /// reserved for transport-level failures.
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Production [`PageFetcher`] backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Builds a fetcher whose requests abort after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        debug!(url, "starting download");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(url, status = status.as_u16(), "non-200 response, treating as empty");
            return Ok(String::new());
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        let elapsed_micros = start.elapsed().as_micros();
        debug!(url, bytes = body.len(), elapsed_micros, "download complete");
        Ok(body)
    }
}
