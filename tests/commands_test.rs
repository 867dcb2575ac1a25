//! End-to-end command tests over in-memory adapters.

use std::sync::Arc;

use content_staging::commands::clipboard::{copy_to_clipboard, get_clipboard, paste_from_clipboard};
use content_staging::commands::dto::{CopyRequest, PasteRequest};
use content_staging::commands::library::sync_library_content;
use content_staging::commands::notifications::{
    filter_notification_preferences, get_show_notifications_tray,
};
use content_staging::commands::CommandErrorKind;
use content_staging::AppRuntime;
use cs_app::AppDeps;
use cs_core::config::FlagsConfig;
use cs_core::content::Block;
use cs_core::flags::{CourseFlagOverrides, CourseFlags};
use cs_core::ids::{CourseKey, LibraryBlockKey, LibraryKey, UserId};
use cs_core::library::LibraryBlock;
use cs_core::notifications::{
    AppPreferences, CoursePreferences, ForumRole, NotificationApp, NotificationTypePreference,
    NotificationTypeRegistry,
};
use cs_core::ports::{ContentStorePort, ModuleStorePort};
use cs_infra::content::InMemoryContentStore;
use cs_infra::enrollment::{InMemoryEnrollmentRepository, InMemoryForumRoleRepository};
use cs_infra::flags::StaticFeatureFlags;
use cs_infra::hashing::Blake3Hasher;
use cs_infra::ids::UuidBlockIdGenerator;
use cs_infra::library::InMemoryLibrarySource;
use cs_infra::modulestore::InMemoryModuleStore;
use cs_infra::staged::InMemoryStagedContentRepository;
use cs_infra::SystemClock;

struct Fixture {
    runtime: AppRuntime,
    modules: Arc<InMemoryModuleStore>,
    assets: Arc<InMemoryContentStore>,
    libraries: Arc<InMemoryLibrarySource>,
    enrollments: Arc<InMemoryEnrollmentRepository>,
    roles: Arc<InMemoryForumRoleRepository>,
}

fn toy() -> CourseKey {
    "course-v1:edX+Toy+2012_Fall".parse().unwrap()
}

fn fixture(flags: FlagsConfig) -> Fixture {
    let modules = Arc::new(InMemoryModuleStore::new());
    let assets = Arc::new(InMemoryContentStore::new(Arc::new(Blake3Hasher)));
    let libraries = Arc::new(InMemoryLibrarySource::new());
    let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
    let roles = Arc::new(InMemoryForumRoleRepository::new());

    let runtime = AppRuntime::new(AppDeps {
        module_store: modules.clone(),
        content_store: assets.clone(),
        library_source: libraries.clone(),
        staged_content_repo: Arc::new(InMemoryStagedContentRepository::new()),
        max_concurrent_asset_copies: 2,
        enrollments: enrollments.clone(),
        forum_roles: roles.clone(),
        feature_flags: Arc::new(StaticFeatureFlags::from_config(&flags)),
        notification_types: Arc::new(NotificationTypeRegistry::builtin()),
        clock: Arc::new(SystemClock),
        block_ids: Arc::new(UuidBlockIdGenerator),
    });

    Fixture {
        runtime,
        modules,
        assets,
        libraries,
        enrollments,
        roles,
    }
}

#[tokio::test]
async fn copy_then_paste_reports_new_files() {
    let f = fixture(FlagsConfig::default());
    let user = UserId::new(10);
    let vertical = toy().make_usage_key("vertical", "unit");
    let html = toy().make_usage_key("html", "intro");
    f.modules
        .upsert_blocks(vec![
            Block::new(vertical.clone()).with_children(vec![html.clone()]),
            Block::new(html.clone())
                .with_display_name("Intro")
                .with_field("data", r#"<img src="/static/logo.png">"#),
        ])
        .await
        .unwrap();
    f.assets
        .put(&toy().make_asset_key("logo.png"), b"png".to_vec(), Some("image/png".into()))
        .await
        .unwrap();
    let other: CourseKey = "course-v1:edX+Other+2024".parse().unwrap();
    let target = other.make_usage_key("vertical", "target");
    f.modules
        .upsert_blocks(vec![Block::new(target.clone())])
        .await
        .unwrap();

    let status = copy_to_clipboard(
        &f.runtime,
        user,
        CopyRequest {
            usage_key: html.to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(status.source_usage_key, html.to_string());
    assert_eq!(status.content.display_name.as_deref(), Some("Intro"));
    assert_eq!(get_clipboard(&f.runtime, user).await.unwrap(), status);

    let pasted = paste_from_clipboard(
        &f.runtime,
        user,
        PasteRequest {
            parent_locator: target.to_string(),
            staged_content: "clipboard".into(),
        },
    )
    .await
    .unwrap();

    assert!(pasted.locator.starts_with("block-v1:edX+Other+2024+type@html+block@"));
    assert_eq!(pasted.static_file_notices.new_files, vec!["logo.png"]);
    let parent = f.modules.get_block(&target).await.unwrap().unwrap();
    assert_eq!(parent.children.len(), 1);
    assert_eq!(parent.children[0].to_string(), pasted.locator);
}

#[tokio::test]
async fn paste_errors_are_client_errors() {
    let f = fixture(FlagsConfig::default());
    let user = UserId::new(11);
    let target = toy().make_usage_key("vertical", "target").to_string();

    let empty = paste_from_clipboard(
        &f.runtime,
        user,
        PasteRequest {
            parent_locator: target.clone(),
            staged_content: "clipboard".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(empty.kind, CommandErrorKind::Client);

    let wrong_source = paste_from_clipboard(
        &f.runtime,
        user,
        PasteRequest {
            parent_locator: target,
            staged_content: "library".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(wrong_source.kind, CommandErrorKind::Client);

    let bad_key = copy_to_clipboard(
        &f.runtime,
        user,
        CopyRequest {
            usage_key: "not-a-key".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(bad_key.kind, CommandErrorKind::Client);
    assert!(bad_key.message.contains("not-a-key"));
}

#[tokio::test]
async fn clipboards_are_per_user() {
    let f = fixture(FlagsConfig::default());
    let html = toy().make_usage_key("html", "intro");
    f.modules
        .upsert_blocks(vec![Block::new(html.clone())])
        .await
        .unwrap();

    copy_to_clipboard(
        &f.runtime,
        UserId::new(1),
        CopyRequest {
            usage_key: html.to_string(),
        },
    )
    .await
    .unwrap();

    let err = get_clipboard(&f.runtime, UserId::new(2)).await.unwrap_err();
    assert_eq!(err.kind, CommandErrorKind::Client);
}

#[tokio::test]
async fn library_sync_command_reports_counts() {
    let f = fixture(FlagsConfig::default());
    let library = LibraryKey::from("lib:CL-TEST:lib");
    f.libraries
        .set_blocks(
            library.clone(),
            vec![LibraryBlock {
                key: LibraryBlockKey::from("lb:CL-TEST:lib:html:h1"),
                block_type: "html".into(),
                display_name: None,
                fields: Default::default(),
            }],
        )
        .await;
    let lc = toy().make_usage_key("library_content", "lc");
    f.modules
        .upsert_blocks(vec![
            Block::new(lc.clone()).with_field("source_library_id", library.as_str())
        ])
        .await
        .unwrap();

    let first = sync_library_content(&f.runtime, &lc.to_string()).await.unwrap();
    let second = sync_library_content(&f.runtime, &lc.to_string()).await.unwrap();

    assert_eq!(first.created, 1);
    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 1);
    assert_eq!(first.children, second.children);

    let html = toy().make_usage_key("html", "plain");
    f.modules
        .upsert_blocks(vec![Block::new(html.clone())])
        .await
        .unwrap();
    let err = sync_library_content(&f.runtime, &html.to_string())
        .await
        .unwrap_err();
    assert_eq!(err.kind, CommandErrorKind::Client);
}

#[tokio::test]
async fn notification_commands_follow_flags_and_roles() {
    let mut flags = FlagsConfig {
        defaults: CourseFlags::default(),
        ..Default::default()
    };
    flags.courses.insert(
        toy().to_string(),
        CourseFlagOverrides {
            show_notifications_tray: Some(true),
            enable_reported_content_notifications: Some(true),
            ..Default::default()
        },
    );
    let f = fixture(flags);
    let user = UserId::new(20);

    assert!(!get_show_notifications_tray(&f.runtime, user).await.unwrap());
    f.enrollments.enroll(user, toy()).await;
    assert!(get_show_notifications_tray(&f.runtime, user).await.unwrap());

    let mut prefs = CoursePreferences::new(toy());
    let mut discussion = AppPreferences {
        enabled: true,
        ..Default::default()
    };
    for name in ["new_comment", "new_discussion_post", "content_reported"] {
        discussion
            .notification_types
            .insert(name.into(), NotificationTypePreference::default());
    }
    prefs
        .notification_preference_config
        .insert(NotificationApp::Discussion, discussion);

    let as_student = filter_notification_preferences(&f.runtime, user, prefs.clone())
        .await
        .unwrap();
    assert!(as_student.contains_type("new_comment"));
    assert!(!as_student.contains_type("new_discussion_post"));
    assert!(!as_student.contains_type("content_reported"));

    f.roles.assign(user, toy(), ForumRole::Moderator).await;
    let as_moderator = filter_notification_preferences(&f.runtime, user, prefs)
        .await
        .unwrap();
    assert!(as_moderator.contains_type("content_reported"));
    assert!(!as_moderator.contains_type("new_discussion_post"));
}
