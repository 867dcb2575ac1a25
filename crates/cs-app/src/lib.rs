//! Content staging application layer
//!
//! Use cases orchestrating the clipboard, static asset reconciliation,
//! library sync and notification preference filtering over `cs-core` ports.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
