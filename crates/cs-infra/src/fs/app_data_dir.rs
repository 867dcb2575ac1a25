use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "content-staging";

/// Application data root directory.
///
/// 获取应用数据根目录（不会自动创建）。
///
/// - Linux: `$XDG_DATA_HOME/content-staging` or `~/.local/share/content-staging`
/// - macOS: `~/Library/Application Support/content-staging`
/// - Windows: `%APPDATA%\content-staging`
pub fn app_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// 获取日志目录
pub fn logs_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}
