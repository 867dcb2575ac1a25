//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired `AppDeps`; commands call
//! `runtime.usecases().xxx()` to get a use case built from them.
//!
//! ## Adding New Use Cases
//!
//! 1. Give the use case a `new()` constructor taking its ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use std::path::Path;
use std::sync::Arc;

use cs_app::usecases::clipboard::{
    AssetReconciler, PasteFromClipboardUseCase, PeekClipboardUseCase,
    StageClipboardContentUseCase,
};
use cs_app::usecases::library::SyncLibraryContentUseCase;
use cs_app::usecases::notifications::{
    FilterCoursePreferencesUseCase, GetShowNotificationsTrayUseCase,
    RemovePreferencesWithNoAccessUseCase,
};
use cs_app::AppDeps;
use cs_core::config::AppConfig;

use super::config::load_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::{resolve_dir, wire_dependencies, WiringResult};

/// Application runtime with dependencies.
///
/// 包含所有应用依赖的运行时，通过 `usecases()` 提供用例访问。
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    /// One reconciler for every paste built from this runtime.
    reconciler: Arc<AssetReconciler>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let reconciler = Arc::new(AssetReconciler::new(
            deps.content_store.clone(),
            deps.max_concurrent_asset_copies,
        ));
        Self { deps, reconciler }
    }

    pub fn from_config(config: &AppConfig) -> WiringResult<Self> {
        Ok(Self::new(wire_dependencies(config)?))
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Load configuration, start logging and wire the runtime.
///
/// An empty `log_dir` logs under the platform data directory.
pub fn create_runtime(config_path: &Path) -> anyhow::Result<AppRuntime> {
    let config = load_config(config_path)?;
    let log_dir = resolve_dir(&config.log_dir, cs_infra::fs::logs_dir)?;
    init_tracing_subscriber(&log_dir)?;

    let runtime = AppRuntime::from_config(&config)?;
    ::tracing::info!(
        backend = %config.storage_backend,
        digest = %config.digest_algorithm,
        max_concurrent_asset_copies = config.max_concurrent_asset_copies,
        "Runtime ready"
    );
    Ok(runtime)
}

/// Use case accessor bound to one runtime.
/// 绑定到运行时的用例访问器。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn stage_clipboard_content(&self) -> StageClipboardContentUseCase {
        let deps = &self.runtime.deps;
        StageClipboardContentUseCase::new(
            deps.module_store.clone(),
            deps.staged_content_repo.clone(),
            deps.clock.clone(),
        )
    }

    pub fn peek_clipboard(&self) -> PeekClipboardUseCase {
        PeekClipboardUseCase::new(self.runtime.deps.staged_content_repo.clone())
    }

    pub fn paste_from_clipboard(&self) -> PasteFromClipboardUseCase {
        let deps = &self.runtime.deps;
        PasteFromClipboardUseCase::new(
            deps.staged_content_repo.clone(),
            deps.module_store.clone(),
            deps.block_ids.clone(),
            self.runtime.reconciler.clone(),
        )
    }

    pub fn sync_library_content(&self) -> SyncLibraryContentUseCase {
        let deps = &self.runtime.deps;
        SyncLibraryContentUseCase::new(
            deps.module_store.clone(),
            deps.library_source.clone(),
            deps.block_ids.clone(),
        )
    }

    pub fn get_show_notifications_tray(&self) -> GetShowNotificationsTrayUseCase {
        let deps = &self.runtime.deps;
        GetShowNotificationsTrayUseCase::new(deps.enrollments.clone(), deps.feature_flags.clone())
    }

    pub fn remove_preferences_with_no_access(&self) -> RemovePreferencesWithNoAccessUseCase {
        let deps = &self.runtime.deps;
        RemovePreferencesWithNoAccessUseCase::new(
            deps.forum_roles.clone(),
            deps.notification_types.clone(),
        )
    }

    pub fn filter_course_preferences(&self) -> FilterCoursePreferencesUseCase {
        FilterCoursePreferencesUseCase::new(
            self.runtime.deps.feature_flags.clone(),
            self.remove_preferences_with_no_access(),
        )
    }
}
