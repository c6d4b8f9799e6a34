//! Backend error types.
//!
//! Every failure mode of an outbound call maps to one of these variants;
//! the dispatch layer turns them into error-flagged text envelopes, so none
//! of them propagate past the tool boundary.

use thiserror::Error;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while talking to the REST backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached at the transport level.
    #[error(
        "Cannot connect to the backend API at {url}. \
         Make sure the FastAPI server is running \
         (start it with `uvicorn app.main:app --reload`)"
    )]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request failed in flight (timeout, broken connection, bad URL).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to initialize HTTP client: {0}")]
    Init(#[source] reqwest::Error),
}

impl BackendError {
    /// Classify a reqwest send error: connection-level failures get the
    /// connectivity message, everything else is a plain transport error.
    pub(crate) fn from_send_error(url: &str, source: reqwest::Error) -> Self {
        if source.is_connect() {
            Self::Unreachable {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}
