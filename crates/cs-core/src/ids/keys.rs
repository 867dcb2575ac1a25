//! Opaque course, usage and asset keys.
//!
//! String forms follow the platform's v1 locators:
//!
//! - course: `course-v1:{org}+{course}+{run}`
//! - usage:  `block-v1:{org}+{course}+{run}+type@{block_type}+block@{block_id}`
//! - asset:  `asset-v1:{org}+{course}+{run}+type@asset+block@{filename}`
//!
//! Every key parses back from exactly the string it displays as.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

const COURSE_PREFIX: &str = "course-v1:";
const USAGE_PREFIX: &str = "block-v1:";
const ASSET_PREFIX: &str = "asset-v1:";
const TYPE_TAG: &str = "type@";
const BLOCK_TAG: &str = "block@";
const ASSET_BLOCK_TYPE: &str = "asset";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    #[error("invalid course key: {0}")]
    Course(String),

    #[error("invalid usage key: {0}")]
    Usage(String),

    #[error("invalid asset key: {0}")]
    Asset(String),
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment
            .chars()
            .any(|c| matches!(c, '+' | '@' | ':' | '/') || c.is_whitespace())
}

/// Identifies a course run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseKey {
    org: String,
    course: String,
    run: String,
}

impl CourseKey {
    pub fn new(
        org: impl Into<String>,
        course: impl Into<String>,
        run: impl Into<String>,
    ) -> Result<Self, InvalidKeyError> {
        let key = Self {
            org: org.into(),
            course: course.into(),
            run: run.into(),
        };
        if [&key.org, &key.course, &key.run]
            .iter()
            .all(|s| is_valid_segment(s))
        {
            Ok(key)
        } else {
            Err(InvalidKeyError::Course(key.to_string()))
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn run(&self) -> &str {
        &self.run
    }

    /// Builds the key of a block inside this course.
    ///
    /// `block_type` and `block_id` must be plain segments (no `+`, `@`, `:`, `/`).
    pub fn make_usage_key(
        &self,
        block_type: impl Into<String>,
        block_id: impl Into<String>,
    ) -> UsageKey {
        UsageKey {
            course: self.clone(),
            block_type: block_type.into(),
            block_id: block_id.into(),
        }
    }

    /// Builds the key of a static asset inside this course.
    ///
    /// Nested paths are flattened the way the asset store names them:
    /// `images/a.png` becomes `images_a.png`.
    pub fn make_asset_key(&self, filename: &str) -> AssetKey {
        AssetKey {
            course: self.clone(),
            filename: filename.replace('/', "_"),
        }
    }

    fn body(&self) -> String {
        format!("{}+{}+{}", self.org, self.course, self.run)
    }

    fn parse_body(body: &str) -> Option<Self> {
        let mut parts = body.split('+');
        let org = parts.next()?;
        let course = parts.next()?;
        let run = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Self::new(org, course, run).ok()
    }
}

impl Display for CourseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", COURSE_PREFIX, self.body())
    }
}

impl FromStr for CourseKey {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(COURSE_PREFIX)
            .and_then(Self::parse_body)
            .ok_or_else(|| InvalidKeyError::Course(s.to_string()))
    }
}

impl TryFrom<String> for CourseKey {
    type Error = InvalidKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseKey> for String {
    fn from(key: CourseKey) -> Self {
        key.to_string()
    }
}

/// Identifies one block (XBlock) in a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UsageKey {
    course: CourseKey,
    block_type: String,
    block_id: String,
}

impl UsageKey {
    pub fn course_key(&self) -> &CourseKey {
        &self.course
    }

    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }
}

impl Display for UsageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}+{}{}+{}{}",
            USAGE_PREFIX,
            self.course.body(),
            TYPE_TAG,
            self.block_type,
            BLOCK_TAG,
            self.block_id
        )
    }
}

impl FromStr for UsageKey {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidKeyError::Usage(s.to_string());
        let body = s.strip_prefix(USAGE_PREFIX).ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split('+').collect();
        let [org, course, run, type_part, block_part] = parts.as_slice() else {
            return Err(invalid());
        };
        let block_type = type_part.strip_prefix(TYPE_TAG).ok_or_else(invalid)?;
        let block_id = block_part.strip_prefix(BLOCK_TAG).ok_or_else(invalid)?;
        if !is_valid_segment(block_type) || !is_valid_segment(block_id) {
            return Err(invalid());
        }
        let course = CourseKey::new(*org, *course, *run).map_err(|_| invalid())?;
        Ok(course.make_usage_key(block_type, block_id))
    }
}

impl TryFrom<String> for UsageKey {
    type Error = InvalidKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UsageKey> for String {
    fn from(key: UsageKey) -> Self {
        key.to_string()
    }
}

/// Identifies a static asset (course + filename).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetKey {
    course: CourseKey,
    filename: String,
}

impl AssetKey {
    pub fn course_key(&self) -> &CourseKey {
        &self.course
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The same filename in another course's namespace.
    pub fn in_course(&self, course: &CourseKey) -> AssetKey {
        AssetKey {
            course: course.clone(),
            filename: self.filename.clone(),
        }
    }
}

impl Display for AssetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}+{}{}+{}{}",
            ASSET_PREFIX,
            self.course.body(),
            TYPE_TAG,
            ASSET_BLOCK_TYPE,
            BLOCK_TAG,
            self.filename
        )
    }
}

impl FromStr for AssetKey {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidKeyError::Asset(s.to_string());
        let body = s.strip_prefix(ASSET_PREFIX).ok_or_else(invalid)?;
        // Filenames may contain '+', so only the first four separators count.
        let parts: Vec<&str> = body.splitn(5, '+').collect();
        let [org, course, run, type_part, block_part] = parts.as_slice() else {
            return Err(invalid());
        };
        if type_part.strip_prefix(TYPE_TAG) != Some(ASSET_BLOCK_TYPE) {
            return Err(invalid());
        }
        let filename = block_part.strip_prefix(BLOCK_TAG).ok_or_else(invalid)?;
        if filename.is_empty() || filename.contains('/') {
            return Err(invalid());
        }
        let course = CourseKey::new(*org, *course, *run).map_err(|_| invalid())?;
        Ok(course.make_asset_key(filename))
    }
}

impl TryFrom<String> for AssetKey {
    type Error = InvalidKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetKey> for String {
    fn from(key: AssetKey) -> Self {
        key.to_string()
    }
}
