//! Error types for hero-scrape.
//!
//! Retrieval and decode failures are recoverable by design of the pipeline:
//! callers inside the crate turn them into "no result" for a candidate or a
//! page. They only surface to users through the collaborator traits.

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page or asset could not be retrieved (transport error, timeout, non-2xx).
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// Downloaded bytes are not a decodable image.
    #[error("Image decoding failed: {0}")]
    Decode(String),

    /// An input URL could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
