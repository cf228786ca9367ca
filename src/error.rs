use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing a GET and holding decoded
/// song metadata. Per-song callers turn all of these into sentinel values;
/// only the playlist page fetch itself treats an error as fatal.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("JSON-LD script tag not found")]
    MissingJsonLd,

    #[error("failed to parse JSON-LD: {0}")]
    Json(#[from] serde_json::Error),
}
