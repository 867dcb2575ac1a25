//! # Dependency Wiring / 依赖注入
//!
//! Turns an `AppConfig` into `AppDeps`. This is the only place that
//! interprets empty configuration values.
//! 这里是唯一解释空配置值的地方。

use std::path::PathBuf;
use std::sync::Arc;

use cs_app::AppDeps;
use cs_core::config::AppConfig;
use cs_core::notifications::NotificationTypeRegistry;
use cs_core::ports::{ContentHashPort, ContentStorePort};
use cs_infra::content::{FsContentStore, InMemoryContentStore};
use cs_infra::enrollment::{InMemoryEnrollmentRepository, InMemoryForumRoleRepository};
use cs_infra::flags::StaticFeatureFlags;
use cs_infra::hashing::{Blake3Hasher, Sha256Hasher};
use cs_infra::ids::UuidBlockIdGenerator;
use cs_infra::library::InMemoryLibrarySource;
use cs_infra::modulestore::InMemoryModuleStore;
use cs_infra::staged::InMemoryStagedContentRepository;
use cs_infra::SystemClock;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Unknown storage backend: {0}")]
    UnknownStorageBackend(String),

    #[error("Unknown digest algorithm: {0}")]
    UnknownDigestAlgorithm(String),

    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),
}

/// Empty or `blake3` selects BLAKE3; `sha256` selects SHA-256.
pub fn select_hasher(name: &str) -> WiringResult<Arc<dyn ContentHashPort>> {
    match name {
        "" | "blake3" => Ok(Arc::new(Blake3Hasher)),
        "sha256" => Ok(Arc::new(Sha256Hasher)),
        other => Err(WiringError::UnknownDigestAlgorithm(other.to_string())),
    }
}

/// Empty or `memory` selects the in-memory store; `fs` stores assets under
/// `asset_root`, or the platform data directory when that is empty.
pub fn create_content_store(
    config: &AppConfig,
    hasher: Arc<dyn ContentHashPort>,
) -> WiringResult<Arc<dyn ContentStorePort>> {
    match config.storage_backend.as_str() {
        "" | "memory" => Ok(Arc::new(InMemoryContentStore::new(hasher))),
        "fs" => {
            let root = resolve_dir(&config.asset_root, cs_infra::fs::app_data_dir)?;
            ::tracing::info!(root = %root.display(), "Using filesystem asset store");
            Ok(Arc::new(FsContentStore::new(root, hasher)))
        }
        other => Err(WiringError::UnknownStorageBackend(other.to_string())),
    }
}

/// The configured directory, or the platform default when it is empty.
pub fn resolve_dir(
    configured: &std::path::Path,
    default: impl FnOnce() -> anyhow::Result<PathBuf>,
) -> WiringResult<PathBuf> {
    if configured.as_os_str().is_empty() {
        default().map_err(|e| WiringError::DataDirUnavailable(e.to_string()))
    } else {
        Ok(configured.to_path_buf())
    }
}

/// Build every dependency from configuration.
/// 根据配置构造全部依赖。
///
/// Block, clipboard, library, enrollment and role data live in memory.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let hasher = select_hasher(&config.digest_algorithm)?;
    let content_store = create_content_store(config, hasher)?;

    Ok(AppDeps {
        module_store: Arc::new(InMemoryModuleStore::new()),
        content_store,
        library_source: Arc::new(InMemoryLibrarySource::new()),
        staged_content_repo: Arc::new(InMemoryStagedContentRepository::new()),
        max_concurrent_asset_copies: config.max_concurrent_asset_copies,
        enrollments: Arc::new(InMemoryEnrollmentRepository::new()),
        forum_roles: Arc::new(InMemoryForumRoleRepository::new()),
        feature_flags: Arc::new(StaticFeatureFlags::from_config(&config.flags)),
        notification_types: Arc::new(NotificationTypeRegistry::builtin()),
        clock: Arc::new(SystemClock),
        block_ids: Arc::new(UuidBlockIdGenerator),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::HashAlgorithm;

    #[test]
    fn empty_config_wires_in_memory_blake3() {
        let deps = wire_dependencies(&AppConfig::empty()).unwrap();

        assert_eq!(deps.max_concurrent_asset_copies, 0);
        let digest = select_hasher("").unwrap().hash_bytes(b"x").unwrap();
        assert_eq!(digest.alg, HashAlgorithm::Blake3V1);
    }

    #[test]
    fn sha256_can_be_selected() {
        let digest = select_hasher("sha256").unwrap().hash_bytes(b"x").unwrap();
        assert_eq!(digest.alg, HashAlgorithm::Sha256V1);
    }

    #[test]
    fn unknown_names_are_wiring_errors() {
        assert!(matches!(
            select_hasher("md5"),
            Err(WiringError::UnknownDigestAlgorithm(name)) if name == "md5"
        ));

        let mut config = AppConfig::empty();
        config.storage_backend = "s3".into();
        assert!(matches!(
            wire_dependencies(&config),
            Err(WiringError::UnknownStorageBackend(_))
        ));
    }

    #[test]
    fn configured_directory_wins_over_default() {
        let dir = resolve_dir(std::path::Path::new("/srv/assets"), || {
            anyhow::bail!("default should not be consulted")
        })
        .unwrap();
        assert_eq!(dir, PathBuf::from("/srv/assets"));

        let fallback = resolve_dir(std::path::Path::new(""), || Ok(PathBuf::from("/tmp/x"))).unwrap();
        assert_eq!(fallback, PathBuf::from("/tmp/x"));
    }
}
