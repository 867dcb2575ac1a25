use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::content::Block;
use crate::ids::LibraryBlockKey;

/// Serialized form of one block in a staged subtree.
///
/// Identity (course and block id) is recorded only for provenance; paste
/// assigns fresh identifiers and keeps everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedNode {
    pub block_type: String,
    pub source_block_id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<LibraryBlockKey>,
    #[serde(default)]
    pub children: Vec<StagedNode>,
}

impl StagedNode {
    pub fn from_block(block: &Block, children: Vec<StagedNode>) -> Self {
        Self {
            block_type: block.block_type().to_string(),
            source_block_id: block.usage_key.block_id().to_string(),
            display_name: block.display_name.clone(),
            fields: block.fields.clone(),
            upstream: block.upstream.clone(),
            children,
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(StagedNode::node_count).sum::<usize>()
    }
}
