//! Clipboard domain: staged subtrees and paste outcomes.

mod entry;
mod notices;
mod staged_node;

pub use entry::{ClipboardEntry, CLIPBOARD_PURPOSE};
pub use notices::{AssetOutcome, PasteResult, StaticFileNotices};
pub use staged_node::StagedNode;
