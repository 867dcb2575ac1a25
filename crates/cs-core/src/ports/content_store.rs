use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::content::{AssetRecord, ContentHash};
use crate::ids::AssetKey;

/// Static asset storage keyed by course and filename.
#[async_trait]
pub trait ContentStorePort: Send + Sync {
    async fn get(&self, key: &AssetKey) -> Result<Option<AssetRecord>>;

    /// Stores `bytes` under `key`, replacing any previous content, and returns
    /// the stored record with a freshly computed digest.
    async fn put(
        &self,
        key: &AssetKey,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<AssetRecord>;

    /// Digest of the stored content, without loading the bytes.
    async fn find_digest(&self, key: &AssetKey) -> Result<Option<ContentHash>>;
}

#[async_trait]
impl<T: ContentStorePort + ?Sized> ContentStorePort for Arc<T> {
    async fn get(&self, key: &AssetKey) -> Result<Option<AssetRecord>> {
        (**self).get(key).await
    }

    async fn put(
        &self,
        key: &AssetKey,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<AssetRecord> {
        (**self).put(key, bytes, content_type).await
    }

    async fn find_digest(&self, key: &AssetKey) -> Result<Option<ContentHash>> {
        (**self).find_digest(key).await
    }
}
