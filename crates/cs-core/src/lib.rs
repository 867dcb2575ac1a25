//! # cs-core
//!
//! Core domain models and ports for course content staging: the per-user
//! clipboard, static asset reconciliation and notification preference rules.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod flags;
pub mod ids;
pub mod library;
pub mod notifications;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardEntry, PasteResult, StagedNode, StaticFileNotices};
pub use config::AppConfig;
pub use content::{AssetRecord, Block, ContentHash, HashAlgorithm};
pub use error::ClipboardError;
pub use flags::CourseFlags;
pub use ids::{AssetKey, CourseKey, UsageKey, UserId};
