use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use cs_core::content::{AssetRecord, ContentHash};
use cs_core::ids::AssetKey;
use cs_core::ports::{ContentHashPort, ContentStorePort};

const ASSETS_DIR: &str = "assets";
const ASSET_META_FILE_NAME: &str = "meta.json";
const ASSET_DATA_FILE_NAME: &str = "data.bin";

#[derive(Debug, Serialize, Deserialize)]
struct AssetMeta {
    content_digest: ContentHash,
    content_type: Option<String>,
    length: usize,
}

/// Asset store on the local filesystem.
///
/// Layout: `<root>/assets/<course key>/<filename>/{meta.json,data.bin}`.
/// The digest lives in `meta.json`, so digest lookups never read the data.
pub struct FsContentStore {
    root: PathBuf,
    hasher: Arc<dyn ContentHashPort>,
}

impl FsContentStore {
    /// The root directory is created lazily on first write.
    pub fn new(root: PathBuf, hasher: Arc<dyn ContentHashPort>) -> Self {
        Self { root, hasher }
    }

    fn asset_dir(&self, key: &AssetKey) -> Result<PathBuf> {
        validate_filename(key.filename())?;
        Ok(self
            .root
            .join(ASSETS_DIR)
            .join(course_dir_name(key))
            .join(key.filename()))
    }

    async fn read_meta(&self, key: &AssetKey) -> Result<Option<AssetMeta>> {
        let path = self.asset_dir(key)?.join(ASSET_META_FILE_NAME);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes).with_context(|| {
                format!("Failed to parse asset metadata at {}", path.display())
            })?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Course keys contain ':' which some filesystems reject.
fn course_dir_name(key: &AssetKey) -> String {
    key.course_key().to_string().replace(':', "_")
}

fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0'])
    {
        anyhow::bail!("Invalid asset filename: {filename:?}");
    }
    Ok(())
}

async fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).await.with_context(|| {
        format!(
            "Failed to rename {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })
}

#[async_trait]
impl ContentStorePort for FsContentStore {
    async fn get(&self, key: &AssetKey) -> Result<Option<AssetRecord>> {
        let Some(meta) = self.read_meta(key).await? else {
            return Ok(None);
        };
        let data_path = self.asset_dir(key)?.join(ASSET_DATA_FILE_NAME);
        let content = fs::read(&data_path)
            .await
            .with_context(|| format!("Failed to read {}", data_path.display()))?;

        Ok(Some(AssetRecord {
            key: key.clone(),
            content,
            content_digest: meta.content_digest,
            content_type: meta.content_type,
        }))
    }

    async fn put(
        &self,
        key: &AssetKey,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<AssetRecord> {
        let dir = self.asset_dir(key)?;
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let meta = AssetMeta {
            content_digest: self.hasher.hash_bytes(&bytes)?,
            content_type: content_type.clone(),
            length: bytes.len(),
        };

        // A present meta.json always describes complete data: drop the old
        // one before touching data.bin, publish the new one last.
        let meta_path = dir.join(ASSET_META_FILE_NAME);
        match fs::remove_file(&meta_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove {}", meta_path.display()))
            }
        }
        atomic_write(&dir.join(ASSET_DATA_FILE_NAME), &bytes).await?;
        atomic_write(&meta_path, &serde_json::to_vec(&meta)?).await?;

        tracing::debug!(asset = %key, length = meta.length, "Stored asset");
        Ok(AssetRecord {
            key: key.clone(),
            content: bytes,
            content_digest: meta.content_digest,
            content_type,
        })
    }

    async fn find_digest(&self, key: &AssetKey) -> Result<Option<ContentHash>> {
        Ok(self.read_meta(key).await?.map(|meta| meta.content_digest))
    }
}
