//! Error types for the chat pipeline.

/// Fixed text shown to the user when a reply cannot be composed.
pub const COMPOSITION_FAILED: &str = "Failed to process your message. Please try again.";

/// Errors that reach the caller. Classification, rewriting and lookups
/// degrade instead of failing, so they have no variant here.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("Failed to process your message. Please try again.")]
    Composition { cause: String },
    #[error("session storage error: {0}")]
    Storage(String),
}

impl ChatError {
    /// Underlying cause for composition failures.
    pub fn cause(&self) -> Option<&str> {
        match self {
            ChatError::Composition { cause } => Some(cause),
            _ => None,
        }
    }
}
