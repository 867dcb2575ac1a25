use thiserror::Error;

use crate::ids::{InvalidKeyError, UserId};

/// Errors surfaced by the clipboard use cases.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no staged content in the clipboard of user {user_id}")]
    EmptyClipboard { user_id: UserId },

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("staged content could not be decoded: {0}")]
    CorruptStagedContent(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ClipboardError {
    /// Whether the caller, not the server, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyClipboard { .. }
                | Self::NotFound(_)
                | Self::InvalidKey(_)
                | Self::InvalidRequest(_)
        )
    }
}
