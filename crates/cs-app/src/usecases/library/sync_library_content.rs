use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use cs_core::content::Block;
use cs_core::ids::{LibraryBlockKey, UsageKey};
use cs_core::library::LibraryBlock;
use cs_core::ports::{BlockIdGeneratorPort, LibrarySourcePort, ModuleStorePort};
use cs_core::ClipboardError;

/// Result of one library refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySyncOutcome {
    /// Children of the library content block after the refresh, in library order.
    pub children: Vec<UsageKey>,
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

/// Refreshes a library content block's children from its source library.
///
/// A child already linked to a library block keeps its usage key; only
/// library blocks with no linked child get new ones. Children whose library
/// block is gone are detached.
pub struct SyncLibraryContentUseCase {
    module_store: Arc<dyn ModuleStorePort>,
    library_source: Arc<dyn LibrarySourcePort>,
    id_generator: Arc<dyn BlockIdGeneratorPort>,
}

impl SyncLibraryContentUseCase {
    pub fn new(
        module_store: Arc<dyn ModuleStorePort>,
        library_source: Arc<dyn LibrarySourcePort>,
        id_generator: Arc<dyn BlockIdGeneratorPort>,
    ) -> Self {
        Self {
            module_store,
            library_source,
            id_generator,
        }
    }

    #[tracing::instrument(
        name = "usecase.sync_library_content.execute",
        skip(self),
        fields(usage_key = %usage_key)
    )]
    pub async fn execute(&self, usage_key: &UsageKey) -> Result<LibrarySyncOutcome, ClipboardError> {
        let block = self
            .module_store
            .get_block(usage_key)
            .await?
            .ok_or_else(|| ClipboardError::NotFound(usage_key.to_string()))?;

        if !block.is_library_content() {
            return Err(ClipboardError::InvalidRequest(format!(
                "{} is a {} block, not a library content block",
                usage_key,
                block.block_type()
            )));
        }
        let library = block.source_library().ok_or_else(|| {
            ClipboardError::InvalidRequest(format!("{} has no source library", usage_key))
        })?;

        let library_blocks = self
            .library_source
            .get_blocks(&library)
            .await?
            .ok_or_else(|| ClipboardError::NotFound(library.to_string()))?;

        let mut linked = self.linked_children(&block).await?;
        let course = usage_key.course_key();

        let mut created = 0;
        let mut updated = 0;
        let mut children = Vec::with_capacity(library_blocks.len());
        let mut writes = Vec::with_capacity(library_blocks.len());

        for library_block in &library_blocks {
            let child = match linked.remove(&library_block.key) {
                Some(existing) if existing.block_type() == library_block.block_type => {
                    updated += 1;
                    refresh(existing, library_block)
                }
                _ => {
                    created += 1;
                    let key = course.make_usage_key(
                        &library_block.block_type,
                        self.id_generator.next_block_id(),
                    );
                    refresh(Block::new(key), library_block)
                }
            };
            children.push(child.usage_key.clone());
            writes.push(child);
        }

        let removed = block.children.len().saturating_sub(updated);

        self.module_store.upsert_blocks(writes).await?;
        self.module_store
            .replace_children(usage_key, children.clone())
            .await?;

        info!(%library, created, updated, removed, "Library content refreshed");
        Ok(LibrarySyncOutcome {
            children,
            created,
            updated,
            removed,
        })
    }

    /// Current children keyed by the library block they came from.
    async fn linked_children(
        &self,
        block: &Block,
    ) -> Result<HashMap<LibraryBlockKey, Block>, ClipboardError> {
        let mut linked = HashMap::new();
        for child_key in &block.children {
            let Some(child) = self.module_store.get_block(child_key).await? else {
                debug!(child = %child_key, "Skipping dangling child");
                continue;
            };
            if let Some(upstream) = child.upstream.clone() {
                linked.entry(upstream).or_insert(child);
            }
        }
        Ok(linked)
    }
}

/// Applies library content to a course block, keeping its key and course-only state.
fn refresh(mut block: Block, library_block: &LibraryBlock) -> Block {
    block.display_name = library_block.display_name.clone();
    block.fields = library_block.fields.clone();
    block.upstream = Some(library_block.key.clone());
    block
}
