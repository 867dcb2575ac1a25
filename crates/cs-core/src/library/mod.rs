//! Content library snapshot as seen by library content blocks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::ids::LibraryBlockKey;

/// A published block of a content library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryBlock {
    pub key: LibraryBlockKey,
    pub block_type: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}
