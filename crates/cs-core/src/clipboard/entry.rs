use serde::{Deserialize, Serialize};

use super::staged_node::StagedNode;
use crate::ids::{AssetKey, StagedContentId, UsageKey, UserId};

/// Purpose tag of staged content kept in a user's clipboard.
pub const CLIPBOARD_PURPOSE: &str = "clipboard";

/// A user's single live clipboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: StagedContentId,
    pub owner: UserId,
    pub source_usage_key: UsageKey,
    pub block_type: String,
    pub display_name: Option<String>,
    /// JSON encoding of the root [`StagedNode`].
    pub serialized_subtree: String,
    /// Assets referenced anywhere in the subtree, in encounter order.
    pub referenced_asset_keys: Vec<AssetKey>,
    pub created_at_ms: i64,
}

impl ClipboardEntry {
    pub fn subtree(&self) -> Result<StagedNode, serde_json::Error> {
        serde_json::from_str(&self.serialized_subtree)
    }
}
