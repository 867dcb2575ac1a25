//! # Configuration Loader / 配置加载器
//!
//! Reads a TOML file into the `AppConfig` DTO. No validation and no
//! defaults here; the wiring layer interprets empty values.
//! 仅纯数据加载，不做验证，不设默认值。

use anyhow::Context;
use cs_core::config::AppConfig;
use std::path::Path;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// - the file cannot be read
/// - the content is not TOML
/// - the `[flags]` table has values of the wrong type
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value).context("Failed to map config values")
}
