use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::ids::{LibraryBlockKey, LibraryKey, UsageKey};

/// Block type of the placeholder whose children are synced from a library.
pub const LIBRARY_CONTENT_BLOCK_TYPE: &str = "library_content";

/// Field of a library content block naming its source library.
pub const SOURCE_LIBRARY_FIELD: &str = "source_library_id";

/// One unit of course content (video, problem, unit container, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub usage_key: UsageKey,
    pub display_name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default)]
    pub children: Vec<UsageKey>,
    /// String form of the usage key this block was pasted from.
    #[serde(default)]
    pub copied_from_block: Option<String>,
    /// Library block this block was synced from.
    #[serde(default)]
    pub upstream: Option<LibraryBlockKey>,
}

impl Block {
    pub fn new(usage_key: UsageKey) -> Self {
        Self {
            usage_key,
            display_name: None,
            fields: BTreeMap::new(),
            children: Vec::new(),
            copied_from_block: None,
            upstream: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<UsageKey>) -> Self {
        self.children = children;
        self
    }

    pub fn with_upstream(mut self, upstream: LibraryBlockKey) -> Self {
        self.upstream = Some(upstream);
        self
    }

    pub fn block_type(&self) -> &str {
        self.usage_key.block_type()
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn is_library_content(&self) -> bool {
        self.block_type() == LIBRARY_CONTENT_BLOCK_TYPE
    }

    pub fn source_library(&self) -> Option<LibraryKey> {
        self.field_str(SOURCE_LIBRARY_FIELD)
            .filter(|s| !s.is_empty())
            .map(LibraryKey::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CourseKey;

    #[test]
    fn library_content_block_exposes_its_source_library() {
        let course: CourseKey = "course-v1:edX+Toy+2012".parse().unwrap();
        let block = Block::new(course.make_usage_key(LIBRARY_CONTENT_BLOCK_TYPE, "lc"))
            .with_field(SOURCE_LIBRARY_FIELD, "lib:CL-TEST:lib");

        assert!(block.is_library_content());
        assert_eq!(block.source_library(), Some(LibraryKey::from("lib:CL-TEST:lib")));
    }

    #[test]
    fn empty_source_library_is_treated_as_unset() {
        let course: CourseKey = "course-v1:edX+Toy+2012".parse().unwrap();
        let block = Block::new(course.make_usage_key(LIBRARY_CONTENT_BLOCK_TYPE, "lc"))
            .with_field(SOURCE_LIBRARY_FIELD, "");

        assert_eq!(block.source_library(), None);
    }
}
