use serde::{Deserialize, Serialize};

use crate::ids::UsageKey;

/// How one referenced asset was reconciled against the destination course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOutcome {
    /// Copied into the destination.
    New,
    /// Destination already holds the same bytes; nothing reported.
    Identical,
    /// Destination holds different bytes under the same name; left untouched.
    Conflict,
    /// Lookup or copy failed.
    Error,
}

/// Per-filename report of a paste, each list in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFileNotices {
    pub new_files: Vec<String>,
    pub conflicting_files: Vec<String>,
    pub error_files: Vec<String>,
}

impl StaticFileNotices {
    pub fn record(&mut self, filename: &str, outcome: AssetOutcome) {
        let list = match outcome {
            AssetOutcome::New => &mut self.new_files,
            AssetOutcome::Conflict => &mut self.conflicting_files,
            AssetOutcome::Error => &mut self.error_files,
            AssetOutcome::Identical => return,
        };
        list.push(filename.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.new_files.is_empty() && self.conflicting_files.is_empty() && self.error_files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteResult {
    pub new_root_key: UsageKey,
    pub static_file_notices: StaticFileNotices,
}
