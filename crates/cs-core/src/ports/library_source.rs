use anyhow::Result;
use async_trait::async_trait;

use crate::ids::LibraryKey;
use crate::library::LibraryBlock;

/// Read access to published content libraries.
#[async_trait]
pub trait LibrarySourcePort: Send + Sync {
    /// Published blocks of `library` in library order, `None` if it does not exist.
    async fn get_blocks(&self, library: &LibraryKey) -> Result<Option<Vec<LibraryBlock>>>;
}
