//! Error types for feed loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a report feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Failed to read a feed file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed before a response arrived.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("failed to load reports from {url}: HTTP {status}")]
    Status {
        /// Requested endpoint.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Body was not valid JSON, or a report entry was malformed.
    #[error("invalid feed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Source string looked like an HTTP endpoint but is not a valid URL.
    #[error("invalid feed URL {input}: {source}")]
    InvalidUrl {
        /// Source string as given.
        input: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// Body was JSON of an unsupported shape.
    #[error("unsupported feed shape: {0}")]
    Format(String),
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
