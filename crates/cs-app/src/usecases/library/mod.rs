pub mod sync_library_content;

pub use sync_library_content::{LibrarySyncOutcome, SyncLibraryContentUseCase};
