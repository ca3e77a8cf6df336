//! Error types for the chat engine.

use parley_core::error::ParleyError;

/// Errors from the router/responder.
///
/// Search and storage failures during a turn are not errors at this level:
/// they degrade to a displayable reply or a `saved: false` flag.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ParleyError> for ChatError {
    fn from(err: ParleyError) -> Self {
        ChatError::Storage(err.to_string())
    }
}
