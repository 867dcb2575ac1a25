//! Command layer (driving adapter)
//! 命令层：AppRuntime → UseCases 访问器 → 用例 → 端口
//!
//! Commands parse raw identifiers, run one use case inside a
//! `command.*` span and convert results to DTOs.

pub mod clipboard;
pub mod dto;
pub mod error;
pub mod library;
pub mod notifications;

pub use error::{CommandError, CommandErrorKind, CommandResult};
