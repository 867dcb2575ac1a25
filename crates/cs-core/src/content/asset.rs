use serde::{Deserialize, Serialize};

use super::hash::ContentHash;
use crate::ids::AssetKey;

/// A static asset as held by the content store.
///
/// `content_digest` is always the digest of `content`; stores recompute it on
/// every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub key: AssetKey,
    pub content: Vec<u8>,
    pub content_digest: ContentHash,
    pub content_type: Option<String>,
}

impl AssetRecord {
    pub fn filename(&self) -> &str {
        self.key.filename()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
