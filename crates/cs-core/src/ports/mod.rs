//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations. Use cases hold them as `Arc<dyn Port>`.

mod clock;
mod content_store;
mod enrollment;
mod feature_flags;
mod hash;
mod id_generator;
mod library_source;
mod module_store;
mod staged_content;

pub use clock::ClockPort;
pub use content_store::ContentStorePort;
pub use enrollment::{EnrollmentRepositoryPort, ForumRoleRepositoryPort};
pub use feature_flags::FeatureFlagsPort;
pub use hash::ContentHashPort;
pub use id_generator::BlockIdGeneratorPort;
pub use library_source::LibrarySourcePort;
pub use module_store::ModuleStorePort;
pub use staged_content::StagedContentRepositoryPort;
