use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use cs_core::clipboard::ClipboardEntry;
use cs_core::ids::UserId;
use cs_core::ports::StagedContentRepositoryPort;

/// One clipboard slot per user; saving replaces whatever was there.
#[derive(Default)]
pub struct InMemoryStagedContentRepository {
    entries: RwLock<HashMap<UserId, ClipboardEntry>>,
}

impl InMemoryStagedContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StagedContentRepositoryPort for InMemoryStagedContentRepository {
    async fn save(&self, entry: &ClipboardEntry) -> Result<()> {
        let previous = self
            .entries
            .write()
            .await
            .insert(entry.owner, entry.clone());
        if let Some(previous) = previous {
            tracing::debug!(user_id = %entry.owner, replaced = %previous.id, "Replaced clipboard entry");
        }
        Ok(())
    }

    async fn get_for_user(&self, user_id: &UserId) -> Result<Option<ClipboardEntry>> {
        Ok(self.entries.read().await.get(user_id).cloned())
    }
}
