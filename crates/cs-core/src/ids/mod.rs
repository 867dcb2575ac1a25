//! ID type wrappers for type safety.

mod id_macro;
pub mod keys;
pub mod staged;
pub mod user_id;

pub use keys::{AssetKey, CourseKey, InvalidKeyError, UsageKey};
pub use staged::{LibraryBlockKey, LibraryKey, StagedContentId};
pub use user_id::UserId;
