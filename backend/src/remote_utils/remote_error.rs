use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a search or object-detail lookup. Shown to the user as an
/// inline message; the interaction is abandoned and may be retried.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteError {
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            RemoteError::Timeout { url: url.to_string() }
        } else {
            RemoteError::Network { url: url.to_string(), source: error }
        }
    }
}
