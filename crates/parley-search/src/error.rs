//! Error types for the search client.

use parley_core::error::ParleyError;

/// Errors from the search provider call.
///
/// Transport and parse failures are distinct variants so callers can
/// surface them as different displayable outcomes.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Connection, timeout, or non-success HTTP status.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The provider responded, but the body was not the expected JSON.
    #[error("parse failure: {0}")]
    Parse(String),
}

impl From<SearchError> for ParleyError {
    fn from(err: SearchError) -> Self {
        ParleyError::Search(err.to_string())
    }
}
