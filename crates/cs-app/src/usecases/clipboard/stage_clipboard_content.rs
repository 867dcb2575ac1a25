use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info};

use cs_core::clipboard::{ClipboardEntry, StagedNode};
use cs_core::content::{static_references, Block};
use cs_core::ids::{AssetKey, StagedContentId, UsageKey, UserId};
use cs_core::ports::{ClockPort, ModuleStorePort, StagedContentRepositoryPort};
use cs_core::ClipboardError;

/// Copies a block and its descendants into the user's clipboard.
///
/// 将区块及其子树复制到用户剪贴板（每个用户仅保留最新一份）。
pub struct StageClipboardContentUseCase {
    module_store: Arc<dyn ModuleStorePort>,
    staged_repo: Arc<dyn StagedContentRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl StageClipboardContentUseCase {
    pub fn new(
        module_store: Arc<dyn ModuleStorePort>,
        staged_repo: Arc<dyn StagedContentRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            module_store,
            staged_repo,
            clock,
        }
    }

    #[tracing::instrument(
        name = "usecase.stage_clipboard_content.execute",
        skip(self),
        fields(user_id = %user_id, usage_key = %usage_key)
    )]
    pub async fn execute(
        &self,
        user_id: UserId,
        usage_key: &UsageKey,
    ) -> Result<ClipboardEntry, ClipboardError> {
        let blocks = self.load_subtree(usage_key).await?;
        let root = blocks
            .get(usage_key)
            .ok_or_else(|| ClipboardError::NotFound(usage_key.to_string()))?;

        let mut placed = HashSet::new();
        let mut references = Vec::new();
        let subtree = build_node(root, &blocks, &mut placed, &mut references);

        let course = usage_key.course_key();
        let referenced_asset_keys: Vec<AssetKey> = references
            .iter()
            .map(|path| course.make_asset_key(path))
            .fold(Vec::new(), |mut keys, key| {
                if !keys.contains(&key) {
                    keys.push(key);
                }
                keys
            });

        let entry = ClipboardEntry {
            id: StagedContentId::new(),
            owner: user_id,
            source_usage_key: usage_key.clone(),
            block_type: root.block_type().to_string(),
            display_name: root.display_name.clone(),
            serialized_subtree: serde_json::to_string(&subtree)?,
            referenced_asset_keys,
            created_at_ms: self.clock.now_ms(),
        };

        self.staged_repo.save(&entry).await?;

        info!(
            staged_id = %entry.id,
            nodes = subtree.node_count(),
            assets = entry.referenced_asset_keys.len(),
            "Staged content in clipboard"
        );
        Ok(entry)
    }

    /// Breadth-first load of every block reachable from `root`.
    async fn load_subtree(&self, root: &UsageKey) -> Result<HashMap<UsageKey, Block>, ClipboardError> {
        let mut blocks = HashMap::new();
        let mut queue = VecDeque::from([root.clone()]);

        while let Some(key) = queue.pop_front() {
            if blocks.contains_key(&key) {
                continue;
            }
            let block = self
                .module_store
                .get_block(&key)
                .await?
                .ok_or_else(|| ClipboardError::NotFound(key.to_string()))?;
            queue.extend(
                block
                    .children
                    .iter()
                    .filter(|child| !blocks.contains_key(*child))
                    .cloned(),
            );
            blocks.insert(key, block);
        }

        debug!(blocks = blocks.len(), "Loaded subtree");
        Ok(blocks)
    }
}

/// Pre-order conversion; a block already placed in the tree is not placed again.
fn build_node(
    block: &Block,
    blocks: &HashMap<UsageKey, Block>,
    placed: &mut HashSet<UsageKey>,
    references: &mut Vec<String>,
) -> StagedNode {
    placed.insert(block.usage_key.clone());
    for path in static_references(block) {
        if !references.contains(&path) {
            references.push(path);
        }
    }

    let mut children = Vec::with_capacity(block.children.len());
    for child_key in &block.children {
        if placed.contains(child_key) {
            continue;
        }
        if let Some(child) = blocks.get(child_key) {
            children.push(build_node(child, blocks, placed, references));
        }
    }
    StagedNode::from_block(block, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::ids::CourseKey;
    use cs_infra::modulestore::InMemoryModuleStore;
    use cs_infra::staged::InMemoryStagedContentRepository;

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn course() -> CourseKey {
        "course-v1:edX+Toy+2012".parse().unwrap()
    }

    async fn setup(blocks: Vec<Block>) -> (StageClipboardContentUseCase, Arc<InMemoryStagedContentRepository>) {
        let store = Arc::new(InMemoryModuleStore::new());
        store.upsert_blocks(blocks).await.unwrap();
        let repo = Arc::new(InMemoryStagedContentRepository::new());
        let uc = StageClipboardContentUseCase::new(store, repo.clone(), Arc::new(FixedClock(1_700_000_000_000)));
        (uc, repo)
    }

    fn unit_with_html() -> Vec<Block> {
        let unit = course().make_usage_key("vertical", "unit");
        let html = course().make_usage_key("html", "intro");
        let video = course().make_usage_key("video", "clip");
        vec![
            Block::new(unit.clone())
                .with_display_name("Unit 1")
                .with_children(vec![html.clone(), video.clone()]),
            Block::new(html).with_field(
                "data",
                r#"<img src="/static/picture1.jpg"><img src="/static/picture2.jpg"><a href="/static/picture1.jpg">"#,
            ),
            Block::new(video).with_field("youtube_id_1_0", "dQw4w9WgXcQ"),
        ]
    }

    #[tokio::test]
    async fn stages_the_whole_subtree_in_order() {
        let (uc, repo) = setup(unit_with_html()).await;
        let unit = course().make_usage_key("vertical", "unit");

        let entry = uc.execute(UserId::new(3), &unit).await.unwrap();

        assert_eq!(entry.block_type, "vertical");
        assert_eq!(entry.display_name.as_deref(), Some("Unit 1"));
        assert_eq!(entry.created_at_ms, 1_700_000_000_000);
        let subtree = entry.subtree().unwrap();
        assert_eq!(subtree.node_count(), 3);
        let ids: Vec<_> = subtree.children.iter().map(|c| c.source_block_id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "clip"]);

        let stored = repo.get_for_user(&UserId::new(3)).await.unwrap().unwrap();
        assert_eq!(stored, entry);
    }

    #[tokio::test]
    async fn collects_each_referenced_asset_once() {
        let (uc, _repo) = setup(unit_with_html()).await;
        let unit = course().make_usage_key("vertical", "unit");

        let entry = uc.execute(UserId::new(3), &unit).await.unwrap();

        let names: Vec<_> = entry.referenced_asset_keys.iter().map(|k| k.filename()).collect();
        assert_eq!(names, vec!["picture1.jpg", "picture2.jpg"]);
        assert!(entry.referenced_asset_keys.iter().all(|k| k.course_key() == &course()));
    }

    #[tokio::test]
    async fn copying_again_replaces_the_previous_entry() {
        let (uc, repo) = setup(unit_with_html()).await;
        let user = UserId::new(3);

        uc.execute(user, &course().make_usage_key("vertical", "unit")).await.unwrap();
        let second = uc.execute(user, &course().make_usage_key("video", "clip")).await.unwrap();

        let stored = repo.get_for_user(&user).await.unwrap().unwrap();
        assert_eq!(stored.id, second.id);
        assert_eq!(stored.block_type, "video");
    }

    #[tokio::test]
    async fn missing_block_is_not_found() {
        let (uc, repo) = setup(vec![]).await;

        let err = uc
            .execute(UserId::new(3), &course().make_usage_key("html", "nope"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClipboardError::NotFound(_)));
        assert!(repo.get_for_user(&UserId::new(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dangling_child_reference_is_not_found() {
        let unit = course().make_usage_key("vertical", "unit");
        let ghost = course().make_usage_key("html", "ghost");
        let (uc, _repo) = setup(vec![Block::new(unit.clone()).with_children(vec![ghost])]).await;

        let err = uc.execute(UserId::new(3), &unit).await.unwrap_err();

        assert!(matches!(err, ClipboardError::NotFound(ref key) if key.contains("ghost")));
    }

    #[tokio::test]
    async fn cyclic_children_do_not_loop() {
        let a = course().make_usage_key("vertical", "a");
        let b = course().make_usage_key("vertical", "b");
        let (uc, _repo) = setup(vec![
            Block::new(a.clone()).with_children(vec![b.clone()]),
            Block::new(b).with_children(vec![a.clone()]),
        ])
        .await;

        let entry = uc.execute(UserId::new(3), &a).await.unwrap();

        assert_eq!(entry.subtree().unwrap().node_count(), 2);
    }
}
