use anyhow::Result;

use crate::content::ContentHash;

pub trait ContentHashPort: Send + Sync {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash>;
}
