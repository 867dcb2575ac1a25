//! Clipboard use cases: copy a subtree, look at it, paste it elsewhere.
//! 剪贴板用例：复制子树、查看、粘贴到其他位置。

pub mod paste_from_clipboard;
pub mod peek_clipboard;
pub mod reconcile_static_assets;
pub mod stage_clipboard_content;

pub use paste_from_clipboard::PasteFromClipboardUseCase;
pub use peek_clipboard::PeekClipboardUseCase;
pub use reconcile_static_assets::{AssetReconciler, DEFAULT_MAX_CONCURRENT_ASSET_COPIES};
pub use stage_clipboard_content::StageClipboardContentUseCase;
