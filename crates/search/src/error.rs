use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("search failed: HTTP {status}: {body}")]
    SearchFailed { status: StatusCode, body: String },

    #[error("error indexing new person: HTTP {status}: {body}")]
    IndexingFailed { status: StatusCode, body: String },
}
