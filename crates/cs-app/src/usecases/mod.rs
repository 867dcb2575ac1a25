//! Business logic use cases
//! 业务用例
//!
//! StageClipboardContentUseCase   → copy
//!         ↓
//! PeekClipboardUseCase           → inspect
//!         ↓
//! PasteFromClipboardUseCase      → paste
//!         └─ AssetReconciler     → static files
//!
//! SyncLibraryContentUseCase      → library refresh

pub mod clipboard;
pub mod library;
pub mod notifications;
