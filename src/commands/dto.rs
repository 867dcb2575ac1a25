//! Request and response DTOs.
//!
//! These keep the command API apart from domain models so either can evolve.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use cs_app::usecases::library::LibrarySyncOutcome;
use cs_core::clipboard::{ClipboardEntry, PasteResult, StaticFileNotices, CLIPBOARD_PURPOSE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRequest {
    pub usage_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteRequest {
    pub parent_locator: String,
    /// Only `"clipboard"` is accepted.
    pub staged_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedContentDto {
    pub id: String,
    pub user_id: i64,
    /// RFC 3339, UTC.
    pub created: String,
    pub purpose: String,
    pub block_type: String,
    pub display_name: Option<String>,
    pub referenced_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardStatusDto {
    pub content: StagedContentDto,
    pub source_usage_key: String,
}

impl From<ClipboardEntry> for ClipboardStatusDto {
    fn from(entry: ClipboardEntry) -> Self {
        let created = DateTime::<Utc>::from_timestamp_millis(entry.created_at_ms)
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default();
        Self {
            content: StagedContentDto {
                id: entry.id.into_inner(),
                user_id: entry.owner.get(),
                created,
                purpose: CLIPBOARD_PURPOSE.to_string(),
                block_type: entry.block_type,
                display_name: entry.display_name,
                referenced_files: entry
                    .referenced_asset_keys
                    .iter()
                    .map(|key| key.filename().to_string())
                    .collect(),
            },
            source_usage_key: entry.source_usage_key.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteResponseDto {
    /// Usage key of the new block.
    pub locator: String,
    pub static_file_notices: StaticFileNotices,
}

impl From<PasteResult> for PasteResponseDto {
    fn from(result: PasteResult) -> Self {
        Self {
            locator: result.new_root_key.to_string(),
            static_file_notices: result.static_file_notices,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySyncDto {
    pub children: Vec<String>,
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl From<LibrarySyncOutcome> for LibrarySyncDto {
    fn from(outcome: LibrarySyncOutcome) -> Self {
        Self {
            children: outcome.children.iter().map(ToString::to_string).collect(),
            created: outcome.created,
            updated: outcome.updated,
            removed: outcome.removed,
        }
    }
}
