use std::sync::Arc;
use tracing::info;

use cs_core::clipboard::{PasteResult, StagedNode};
use cs_core::content::Block;
use cs_core::ids::{CourseKey, UsageKey, UserId};
use cs_core::ports::{BlockIdGeneratorPort, ModuleStorePort, StagedContentRepositoryPort};
use cs_core::ClipboardError;

use super::reconcile_static_assets::AssetReconciler;

/// Pastes the user's clipboard as the last child of a parent block.
///
/// 1. Every staged node becomes a new block with a freshly generated id.
/// 2. The new subtree is written first, then attached to the parent in one step,
///    so a failed paste leaves the parent's children untouched.
/// 3. Referenced static assets are reconciled against the destination course.
///
/// The clipboard is not consumed; the same content can be pasted repeatedly.
pub struct PasteFromClipboardUseCase {
    staged_repo: Arc<dyn StagedContentRepositoryPort>,
    module_store: Arc<dyn ModuleStorePort>,
    id_generator: Arc<dyn BlockIdGeneratorPort>,
    reconciler: Arc<AssetReconciler>,
}

impl PasteFromClipboardUseCase {
    pub fn new(
        staged_repo: Arc<dyn StagedContentRepositoryPort>,
        module_store: Arc<dyn ModuleStorePort>,
        id_generator: Arc<dyn BlockIdGeneratorPort>,
        reconciler: Arc<AssetReconciler>,
    ) -> Self {
        Self {
            staged_repo,
            module_store,
            id_generator,
            reconciler,
        }
    }

    #[tracing::instrument(
        name = "usecase.paste_from_clipboard.execute",
        skip(self),
        fields(user_id = %user_id, parent = %parent_key)
    )]
    pub async fn execute(
        &self,
        user_id: UserId,
        parent_key: &UsageKey,
    ) -> Result<PasteResult, ClipboardError> {
        let entry = self
            .staged_repo
            .get_for_user(&user_id)
            .await?
            .ok_or(ClipboardError::EmptyClipboard { user_id })?;

        if self.module_store.get_block(parent_key).await?.is_none() {
            return Err(ClipboardError::NotFound(parent_key.to_string()));
        }

        let subtree = entry.subtree()?;
        let destination = parent_key.course_key();

        let mut new_blocks = Vec::with_capacity(subtree.node_count());
        let new_root_key = self.instantiate(&subtree, destination, &mut new_blocks);
        if let Some(root) = new_blocks.iter_mut().find(|b| b.usage_key == new_root_key) {
            root.copied_from_block = Some(entry.source_usage_key.to_string());
        }

        self.module_store.upsert_blocks(new_blocks).await?;
        self.module_store
            .append_child(parent_key, &new_root_key)
            .await?;

        let static_file_notices = self
            .reconciler
            .reconcile_keys(&entry.referenced_asset_keys, destination)
            .await;

        info!(
            new_root = %new_root_key,
            copied_from = %entry.source_usage_key,
            new_files = static_file_notices.new_files.len(),
            conflicting_files = static_file_notices.conflicting_files.len(),
            error_files = static_file_notices.error_files.len(),
            "Pasted clipboard content"
        );

        Ok(PasteResult {
            new_root_key,
            static_file_notices,
        })
    }

    /// Creates blocks for `node` and its descendants, returning the new key of `node`.
    fn instantiate(&self, node: &StagedNode, course: &CourseKey, out: &mut Vec<Block>) -> UsageKey {
        let usage_key = course.make_usage_key(&node.block_type, self.id_generator.next_block_id());
        let children = node
            .children
            .iter()
            .map(|child| self.instantiate(child, course, out))
            .collect();

        out.push(Block {
            usage_key: usage_key.clone(),
            display_name: node.display_name.clone(),
            fields: node.fields.clone(),
            children,
            copied_from_block: None,
            upstream: node.upstream.clone(),
        });
        usage_key
    }
}
