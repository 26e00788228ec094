use std::time::Duration;
use thiserror::Error;

/// Errors raised while fetching the collection list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server answered {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("Malformed collection list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Collection fetch timed out after {0:?}")]
    Timeout(Duration),
}

impl FetchError {
    /// True for failures worth retrying by navigating again.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { .. } | FetchError::Timeout(_) => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Client(_) | FetchError::Decode(_) => false,
        }
    }
}
