//! Change reducer error types

use super::ViewError;

/// Errors that can occur while decoding or applying a change.
#[derive(Debug, thiserror::Error)]
pub enum ChangeError {
    /// The change kind is not one of the recognized kinds.
    #[error("Invalid change type: {kind}")]
    InvalidChangeKind { kind: String },

    /// The change kind is known but its payload could not be decoded.
    #[error("Invalid change payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Running the view pipeline for a displayed-items selection failed.
    #[error(transparent)]
    View(#[from] ViewError),
}

impl ChangeError {
    /// Creates a new invalid change kind error.
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidChangeKind { kind: kind.into() }
    }
}
