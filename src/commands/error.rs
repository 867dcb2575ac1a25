use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use cs_core::ids::InvalidKeyError;
use cs_core::ClipboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandErrorKind {
    /// The request cannot succeed as sent.
    Client,
    Server,
}

/// Error returned by every command.
/// 所有命令统一返回的错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub kind: CommandErrorKind,
    pub message: String,
}

pub type CommandResult<T> = Result<T, CommandError>;

impl CommandError {
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            kind: CommandErrorKind::Client,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: CommandErrorKind::Server,
            message: message.into(),
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<ClipboardError> for CommandError {
    fn from(err: ClipboardError) -> Self {
        if err.is_client_error() {
            Self::client(err.to_string())
        } else {
            tracing::error!(error = %err, "Command failed");
            Self::server(err.to_string())
        }
    }
}

impl From<InvalidKeyError> for CommandError {
    fn from(err: InvalidKeyError) -> Self {
        Self::client(err.to_string())
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "Command failed");
        Self::server(err.to_string())
    }
}
