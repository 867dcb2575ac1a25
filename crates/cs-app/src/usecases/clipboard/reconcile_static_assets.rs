use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use cs_core::clipboard::{AssetOutcome, StaticFileNotices};
use cs_core::content::AssetRecord;
use cs_core::ids::{AssetKey, CourseKey};
use cs_core::ports::ContentStorePort;

/// Used when the configuration does not set a bound.
pub const DEFAULT_MAX_CONCURRENT_ASSET_COPIES: usize = 4;

enum PendingAsset {
    Record(AssetRecord),
    Key(AssetKey),
}

impl PendingAsset {
    fn filename(&self) -> &str {
        match self {
            PendingAsset::Record(record) => record.filename(),
            PendingAsset::Key(key) => key.filename(),
        }
    }
}

/// Reconciles static assets referenced by pasted content against the
/// destination course.
///
/// Per source asset, by filename:
/// - missing in the destination: copied, reported in `new_files`
/// - same digest: left alone, not reported
/// - different digest: left alone, reported in `conflicting_files`
/// - lookup or copy failure: reported in `error_files`, processing continues
///
/// Copies run concurrently up to `max_concurrent_copies`; notices keep the
/// order in which assets were given.
pub struct AssetReconciler {
    content_store: Arc<dyn ContentStorePort>,
    max_concurrent_copies: usize,
}

impl AssetReconciler {
    /// A bound of 0 falls back to [`DEFAULT_MAX_CONCURRENT_ASSET_COPIES`].
    pub fn new(content_store: Arc<dyn ContentStorePort>, max_concurrent_copies: usize) -> Self {
        let max_concurrent_copies = if max_concurrent_copies == 0 {
            DEFAULT_MAX_CONCURRENT_ASSET_COPIES
        } else {
            max_concurrent_copies
        };
        Self {
            content_store,
            max_concurrent_copies,
        }
    }

    /// Reconciles already loaded source records.
    #[tracing::instrument(
        name = "usecase.reconcile_static_assets.execute",
        skip(self, source_assets),
        fields(destination = %destination, assets = source_assets.len())
    )]
    pub async fn reconcile(
        &self,
        source_assets: Vec<AssetRecord>,
        destination: &CourseKey,
    ) -> StaticFileNotices {
        let pending = source_assets.into_iter().map(PendingAsset::Record).collect();
        self.reconcile_pending(pending, destination).await
    }

    /// Loads each source asset from the content store, then reconciles it.
    /// A source that cannot be loaded is reported in `error_files`.
    #[tracing::instrument(
        name = "usecase.reconcile_static_assets.execute_keys",
        skip(self, source_keys),
        fields(destination = %destination, assets = source_keys.len())
    )]
    pub async fn reconcile_keys(
        &self,
        source_keys: &[AssetKey],
        destination: &CourseKey,
    ) -> StaticFileNotices {
        let pending = source_keys.iter().cloned().map(PendingAsset::Key).collect();
        self.reconcile_pending(pending, destination).await
    }

    async fn reconcile_pending(
        &self,
        pending: Vec<PendingAsset>,
        destination: &CourseKey,
    ) -> StaticFileNotices {
        let mut seen = HashSet::new();
        let unique: Vec<PendingAsset> = pending
            .into_iter()
            .filter(|asset| seen.insert(asset.filename().to_string()))
            .collect();

        // `buffered` yields results in input order regardless of completion order.
        let outcomes: Vec<(String, AssetOutcome)> = stream::iter(unique)
            .map(|asset| async move {
                let filename = asset.filename().to_string();
                let outcome = self.reconcile_one(asset, destination).await;
                (filename, outcome)
            })
            .buffered(self.max_concurrent_copies)
            .collect()
            .await;

        let mut notices = StaticFileNotices::default();
        for (filename, outcome) in &outcomes {
            notices.record(filename, *outcome);
        }

        debug!(
            new = notices.new_files.len(),
            conflicting = notices.conflicting_files.len(),
            errors = notices.error_files.len(),
            "Static assets reconciled"
        );
        notices
    }

    async fn reconcile_one(&self, asset: PendingAsset, destination: &CourseKey) -> AssetOutcome {
        let source = match asset {
            PendingAsset::Record(record) => record,
            PendingAsset::Key(key) => match self.content_store.get(&key).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    warn!(asset = %key, "Referenced static asset is missing from the source course");
                    return AssetOutcome::Error;
                }
                Err(err) => {
                    warn!(asset = %key, error = %err, "Failed to load source static asset");
                    return AssetOutcome::Error;
                }
            },
        };

        let dest_key = source.key.in_course(destination);
        match self.content_store.find_digest(&dest_key).await {
            Ok(Some(digest)) if digest == source.content_digest => AssetOutcome::Identical,
            Ok(Some(digest)) => {
                debug!(
                    asset = %dest_key,
                    source_digest = %source.content_digest,
                    dest_digest = %digest,
                    "Destination asset differs, keeping it"
                );
                AssetOutcome::Conflict
            }
            Ok(None) => match self
                .content_store
                .put(&dest_key, source.content, source.content_type)
                .await
            {
                Ok(_) => AssetOutcome::New,
                Err(err) => {
                    warn!(asset = %dest_key, error = %err, "Failed to copy static asset");
                    AssetOutcome::Error
                }
            },
            Err(err) => {
                warn!(asset = %dest_key, error = %err, "Failed to look up destination asset");
                AssetOutcome::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cs_core::content::ContentHash;
    use cs_core::ports::ContentHashPort;
    use cs_infra::hashing::Blake3Hasher;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Map-backed store whose writes fail for selected filenames.
    #[derive(Default)]
    struct FakeContentStore {
        records: Mutex<HashMap<AssetKey, AssetRecord>>,
        failing_puts: HashSet<String>,
        put_calls: Mutex<Vec<String>>,
    }

    impl FakeContentStore {
        fn insert(&self, key: AssetKey, bytes: &[u8]) -> AssetRecord {
            let record = record(key, bytes);
            self.records
                .lock()
                .unwrap()
                .insert(record.key.clone(), record.clone());
            record
        }

        fn bytes_of(&self, key: &AssetKey) -> Option<Vec<u8>> {
            self.records
                .lock()
                .unwrap()
                .get(key)
                .map(|r| r.content.clone())
        }
    }

    fn record(key: AssetKey, bytes: &[u8]) -> AssetRecord {
        AssetRecord {
            content_digest: Blake3Hasher.hash_bytes(bytes).unwrap(),
            key,
            content: bytes.to_vec(),
            content_type: Some("image/jpeg".into()),
        }
    }

    #[async_trait]
    impl ContentStorePort for FakeContentStore {
        async fn get(&self, key: &AssetKey) -> anyhow::Result<Option<AssetRecord>> {
            Ok(self.records.lock().unwrap().get(key).cloned())
        }

        async fn put(
            &self,
            key: &AssetKey,
            bytes: Vec<u8>,
            content_type: Option<String>,
        ) -> anyhow::Result<AssetRecord> {
            self.put_calls
                .lock()
                .unwrap()
                .push(key.filename().to_string());
            // Later assets finish first so ordering has to come from the merge.
            let delay = 30u64.saturating_sub(self.put_calls.lock().unwrap().len() as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if self.failing_puts.contains(key.filename()) {
                anyhow::bail!("disk full");
            }
            let mut stored = record(key.clone(), &bytes);
            stored.content_type = content_type;
            self.records
                .lock()
                .unwrap()
                .insert(key.clone(), stored.clone());
            Ok(stored)
        }

        async fn find_digest(&self, key: &AssetKey) -> anyhow::Result<Option<ContentHash>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .get(key)
                .map(|r| r.content_digest.clone()))
        }
    }

    fn source() -> CourseKey {
        "course-v1:edX+Source+2024".parse().unwrap()
    }

    fn dest() -> CourseKey {
        "course-v1:edX+Dest+2024".parse().unwrap()
    }

    #[tokio::test]
    async fn new_conflicting_and_identical_assets_are_classified() {
        let store = Arc::new(FakeContentStore::default());
        let pic1 = store.insert(source().make_asset_key("picture1.jpg"), b"one");
        let pic2 = store.insert(source().make_asset_key("picture2.jpg"), b"two");
        let pic3 = store.insert(source().make_asset_key("picture3.jpg"), b"three");
        store.insert(dest().make_asset_key("picture2.jpg"), b"something else");
        store.insert(dest().make_asset_key("picture3.jpg"), b"three");

        let reconciler = AssetReconciler::new(store.clone(), 2);
        let notices = reconciler.reconcile(vec![pic1, pic2, pic3], &dest()).await;

        assert_eq!(
            notices,
            StaticFileNotices {
                new_files: vec!["picture1.jpg".into()],
                conflicting_files: vec!["picture2.jpg".into()],
                error_files: vec![],
            }
        );
        assert_eq!(
            store.bytes_of(&dest().make_asset_key("picture1.jpg")),
            Some(b"one".to_vec())
        );
        assert_eq!(
            store.bytes_of(&dest().make_asset_key("picture2.jpg")),
            Some(b"something else".to_vec())
        );
    }

    #[tokio::test]
    async fn notices_keep_encounter_order_under_concurrency() {
        let store = Arc::new(FakeContentStore::default());
        let records: Vec<AssetRecord> = ["c.png", "a.png", "b.png"]
            .iter()
            .map(|name| store.insert(source().make_asset_key(name), name.as_bytes()))
            .collect();

        let reconciler = AssetReconciler::new(store.clone(), 3);
        let notices = reconciler.reconcile(records, &dest()).await;

        assert_eq!(notices.new_files, vec!["c.png", "a.png", "b.png"]);
    }

    #[tokio::test]
    async fn copy_failure_is_reported_and_does_not_stop_the_rest() {
        let store = Arc::new(FakeContentStore {
            failing_puts: HashSet::from(["broken.pdf".to_string()]),
            ..Default::default()
        });
        let broken = store.insert(source().make_asset_key("broken.pdf"), b"x");
        let fine = store.insert(source().make_asset_key("fine.pdf"), b"y");

        let reconciler = AssetReconciler::new(store.clone(), 1);
        let notices = reconciler.reconcile(vec![broken, fine], &dest()).await;

        assert_eq!(notices.error_files, vec!["broken.pdf"]);
        assert_eq!(notices.new_files, vec!["fine.pdf"]);
        assert!(store.bytes_of(&dest().make_asset_key("broken.pdf")).is_none());
    }

    #[tokio::test]
    async fn duplicate_filenames_are_processed_once() {
        let store = Arc::new(FakeContentStore::default());
        let pic = store.insert(source().make_asset_key("pic.png"), b"p");

        let reconciler = AssetReconciler::new(store.clone(), 0);
        let notices = reconciler.reconcile(vec![pic.clone(), pic], &dest()).await;

        assert_eq!(notices.new_files, vec!["pic.png"]);
        assert_eq!(store.put_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn keys_missing_from_source_are_errors() {
        let store = Arc::new(FakeContentStore::default());
        store.insert(source().make_asset_key("present.png"), b"p");
        let keys = vec![
            source().make_asset_key("missing.png"),
            source().make_asset_key("present.png"),
        ];

        let reconciler = AssetReconciler::new(store.clone(), 4);
        let notices = reconciler.reconcile_keys(&keys, &dest()).await;

        assert_eq!(notices.error_files, vec!["missing.png"]);
        assert_eq!(notices.new_files, vec!["present.png"]);
    }

    #[tokio::test]
    async fn pasting_into_the_source_course_reports_nothing() {
        let store = Arc::new(FakeContentStore::default());
        let key = source().make_asset_key("same.png");
        store.insert(key.clone(), b"same");

        let reconciler = AssetReconciler::new(store.clone(), 4);
        let notices = reconciler.reconcile_keys(&[key], &source()).await;

        assert!(notices.is_empty());
        assert!(store.put_calls.lock().unwrap().is_empty());
    }
}
