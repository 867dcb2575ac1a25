use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use cs_core::content::Block;
use cs_core::ids::UsageKey;
use cs_core::ports::ModuleStorePort;

/// Block store held in one lock, so each call is applied all at once.
#[derive(Default)]
pub struct InMemoryModuleStore {
    blocks: RwLock<HashMap<UsageKey, Block>>,
}

impl InMemoryModuleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ModuleStorePort for InMemoryModuleStore {
    async fn get_block(&self, key: &UsageKey) -> Result<Option<Block>> {
        Ok(self.blocks.read().await.get(key).cloned())
    }

    async fn upsert_blocks(&self, blocks: Vec<Block>) -> Result<()> {
        let mut guard = self.blocks.write().await;
        for block in blocks {
            guard.insert(block.usage_key.clone(), block);
        }
        Ok(())
    }

    async fn append_child(&self, parent: &UsageKey, child: &UsageKey) -> Result<()> {
        let mut guard = self.blocks.write().await;
        if !guard.contains_key(child) {
            return Err(anyhow!("child block {child} does not exist"));
        }
        let parent_block = guard
            .get_mut(parent)
            .ok_or_else(|| anyhow!("parent block {parent} does not exist"))?;
        parent_block.children.push(child.clone());
        Ok(())
    }

    async fn replace_children(&self, parent: &UsageKey, children: Vec<UsageKey>) -> Result<()> {
        let mut guard = self.blocks.write().await;
        let parent_block = guard
            .get_mut(parent)
            .ok_or_else(|| anyhow!("parent block {parent} does not exist"))?;
        parent_block.children = children;
        Ok(())
    }
}
