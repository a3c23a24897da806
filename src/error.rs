//! Error type shared by every stage of the report pipeline.

use thiserror::Error;

/// Failures surfaced by fetching, aggregating, narrating and rendering.
///
/// A run stops at the first error; nothing is rendered from partial data.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Transport-level failure talking to a remote API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote API answered with a non-success status code.
    #[error("unexpected response status {status} from {url}")]
    Status { status: u16, url: String },

    /// The news feed could not be retrieved or decoded.
    #[error("failed to fetch news feed: {0}")]
    Fetch(String),

    /// No article in the feed carries a sentiment entry for the ticker.
    #[error("no articles in the feed mention ticker {ticker}")]
    EmptyInput { ticker: String },

    /// The language model call failed or returned no text.
    #[error("narrative generation failed: {0}")]
    Narrative(String),

    /// The PDF library rejected the document.
    #[error("PDF rendering failed: {0}")]
    Render(String),

    /// Missing or invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
