use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use cs_core::content::{AssetRecord, ContentHash};
use cs_core::ids::AssetKey;
use cs_core::ports::{ContentHashPort, ContentStorePort};

/// Process-local asset store. Digests are computed on write.
pub struct InMemoryContentStore {
    hasher: Arc<dyn ContentHashPort>,
    assets: RwLock<HashMap<AssetKey, AssetRecord>>,
}

impl InMemoryContentStore {
    pub fn new(hasher: Arc<dyn ContentHashPort>) -> Self {
        Self {
            hasher,
            assets: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ContentStorePort for InMemoryContentStore {
    async fn get(&self, key: &AssetKey) -> Result<Option<AssetRecord>> {
        Ok(self.assets.read().await.get(key).cloned())
    }

    async fn put(
        &self,
        key: &AssetKey,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<AssetRecord> {
        let record = AssetRecord {
            key: key.clone(),
            content_digest: self.hasher.hash_bytes(&bytes)?,
            content: bytes,
            content_type,
        };
        self.assets
            .write()
            .await
            .insert(key.clone(), record.clone());
        Ok(record)
    }

    async fn find_digest(&self, key: &AssetKey) -> Result<Option<ContentHash>> {
        Ok(self
            .assets
            .read()
            .await
            .get(key)
            .map(|record| record.content_digest.clone()))
    }
}
