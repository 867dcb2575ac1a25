//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for use case construction. Not a builder: every
//! dependency is required and nothing is defaulted here.
//! 仅用于参数打包：所有依赖都是必需的，无默认值。

use std::sync::Arc;

use cs_core::notifications::NotificationTypeRegistry;
use cs_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
pub struct AppDeps {
    // Content dependencies / 内容依赖
    pub module_store: Arc<dyn ModuleStorePort>,
    pub content_store: Arc<dyn ContentStorePort>,
    pub library_source: Arc<dyn LibrarySourcePort>,

    // Clipboard dependencies / 剪贴板依赖
    pub staged_content_repo: Arc<dyn StagedContentRepositoryPort>,
    pub max_concurrent_asset_copies: usize,

    // Notification dependencies / 通知依赖
    pub enrollments: Arc<dyn EnrollmentRepositoryPort>,
    pub forum_roles: Arc<dyn ForumRoleRepositoryPort>,
    pub feature_flags: Arc<dyn FeatureFlagsPort>,
    pub notification_types: Arc<NotificationTypeRegistry>,

    // System services / 系统服务
    pub clock: Arc<dyn ClockPort>,
    pub block_ids: Arc<dyn BlockIdGeneratorPort>,
}
