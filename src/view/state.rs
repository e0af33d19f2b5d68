//! Three-state fetch result

use crate::client::FetchError;
use serde::Serialize;

/// Outcome of one view activation
///
/// Transitions only go from `Loading` to one of the terminal states.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchResult<T> {
    Loading,
    Error { message: String },
    Ready { items: Vec<T> },
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        FetchResult::Loading
    }
}

impl<T> FetchResult<T> {
    /// Terminal state for a completed fetch
    pub fn from_outcome(outcome: Result<Vec<T>, FetchError>) -> Self {
        match outcome {
            Ok(items) => FetchResult::Ready { items },
            Err(e) => FetchResult::Error {
                message: e.to_string(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchResult::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Items of a `Ready` result
    pub fn items(&self) -> Option<&[T]> {
        match self {
            FetchResult::Ready { items } => Some(items),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchResult::Error { message } => Some(message),
            _ => None,
        }
    }

    /// `Ready` with zero items, shown as the empty-state message
    pub fn is_empty_ready(&self) -> bool {
        self.items().is_some_and(<[T]>::is_empty)
    }
}
