//! Fetch error types
//!
//! Transport-level failures only. Malformed content inside a valid JSON
//! response is absorbed by the normalizer and never shows up here.

use thiserror::Error;

/// Errors that can occur while fetching a resource
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (unreachable host, reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// The response body is not valid JSON
    #[error("Invalid JSON response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Status code of a transport failure
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type alias for fetch operations
pub type Fetched<T> = Result<T, FetchError>;
