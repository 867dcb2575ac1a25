//! Course content: blocks, static assets and their digests.

pub mod asset;
pub mod block;
pub mod hash;
pub mod static_refs;

pub use asset::AssetRecord;
pub use block::{Block, LIBRARY_CONTENT_BLOCK_TYPE, SOURCE_LIBRARY_FIELD};
pub use hash::{ContentHash, HashAlgorithm};
pub use static_refs::static_references;
