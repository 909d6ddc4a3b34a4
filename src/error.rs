//! Error types for the unicrawl crate

use thiserror::Error;

/// Result type for unicrawl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for unicrawl operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Web crawling error
    #[error("Crawl error: {0}")]
    Crawl(String),

    /// Export error
    #[error("Export error: {0}")]
    Export(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
