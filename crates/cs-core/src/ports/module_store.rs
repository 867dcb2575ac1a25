use anyhow::Result;
use async_trait::async_trait;

use crate::content::Block;
use crate::ids::UsageKey;

/// Block tree storage.
#[async_trait]
pub trait ModuleStorePort: Send + Sync {
    async fn get_block(&self, key: &UsageKey) -> Result<Option<Block>>;

    /// Inserts or replaces every block in one write.
    async fn upsert_blocks(&self, blocks: Vec<Block>) -> Result<()>;

    /// Appends `child` to the end of `parent`'s children in a single update;
    /// readers never observe a partial list. Fails if `parent` is missing.
    async fn append_child(&self, parent: &UsageKey, child: &UsageKey) -> Result<()>;

    /// Replaces `parent`'s children list. Fails if `parent` is missing.
    async fn replace_children(&self, parent: &UsageKey, children: Vec<UsageKey>) -> Result<()>;
}
