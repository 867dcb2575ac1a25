//! Static asset stores.

mod fs_store;
mod in_memory;

pub use fs_store::FsContentStore;
pub use in_memory::InMemoryContentStore;
