//! Error types for the crawler module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for crawler operations
///
/// None of these abort a crawl run. Fetch errors are logged and the page is
/// skipped without enqueueing children; extraction errors are contained
/// inside the registry; malformed links are dropped individually.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status for a fetched page
    #[error("fetch failed for {url}: status {status}")]
    Fetch {
        /// URL that failed
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A structured extractor failed mid-derivation
    #[error("structured extraction failed: {0}")]
    Extraction(String),
}

impl From<CrawlError> for CrateError {
    fn from(err: CrawlError) -> Self {
        match err {
            CrawlError::Http(e) => CrateError::Http(e),
            _ => CrateError::Crawl(err.to_string()),
        }
    }
}
