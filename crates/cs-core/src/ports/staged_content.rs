use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardEntry;
use crate::ids::UserId;

/// Per-user clipboard storage; at most one live entry per user.
#[async_trait]
pub trait StagedContentRepositoryPort: Send + Sync {
    /// Stores `entry` as its owner's clipboard, replacing any previous entry.
    async fn save(&self, entry: &ClipboardEntry) -> Result<()>;

    async fn get_for_user(&self, user_id: &UserId) -> Result<Option<ClipboardEntry>>;
}
