//! Content staging service: copy blocks to a per-user clipboard, paste them
//! elsewhere, and filter notification preferences.

pub mod bootstrap;
pub mod commands;

pub use bootstrap::{load_config, AppRuntime};
