use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of one staged clipboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StagedContentId(String);

impl StagedContentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for StagedContentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Key of a content library, e.g. `lib:CL-TEST:lib`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LibraryKey(String);

/// Key of a block inside a content library, e.g. `lb:CL-TEST:lib:problem:p1`.
///
/// Course blocks synced from a library carry this as their `upstream`, which is
/// what keeps their local identifiers stable across re-syncs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LibraryBlockKey(String);

impl_id!(StagedContentId, LibraryKey, LibraryBlockKey);
