use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use cs_core::ids::LibraryKey;
use cs_core::library::LibraryBlock;
use cs_core::ports::LibrarySourcePort;

/// Content libraries held in memory, replaced wholesale per library.
#[derive(Default)]
pub struct InMemoryLibrarySource {
    libraries: RwLock<HashMap<LibraryKey, Vec<LibraryBlock>>>,
}

impl InMemoryLibrarySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_blocks(&self, library: LibraryKey, blocks: Vec<LibraryBlock>) {
        self.libraries.write().await.insert(library, blocks);
    }
}

#[async_trait]
impl LibrarySourcePort for InMemoryLibrarySource {
    async fn get_blocks(&self, library: &LibraryKey) -> Result<Option<Vec<LibraryBlock>>> {
        Ok(self.libraries.read().await.get(library).cloned())
    }
}
