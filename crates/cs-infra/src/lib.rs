//! Infrastructure adapters implementing `cs-core` ports.

pub mod content;
pub mod enrollment;
pub mod flags;
pub mod fs;
pub mod hashing;
pub mod ids;
pub mod library;
pub mod modulestore;
pub mod staged;
pub mod time;

pub use time::SystemClock;
