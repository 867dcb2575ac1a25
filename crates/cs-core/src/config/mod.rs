//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! Configuration DTO mapped from TOML. No validation and no policy here:
//! missing values become empty facts and the wiring layer decides what they
//! mean.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::flags::{CourseFlagOverrides, CourseFlags};

/// Feature flag section: global defaults plus per-course overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagsConfig {
    pub defaults: CourseFlags,
    /// Keyed by the course key's string form.
    pub courses: BTreeMap<String, CourseFlagOverrides>,
}

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage backend name (`memory`, `fs`, or empty)
    pub storage_backend: String,

    /// Root directory of the filesystem asset store (path only, no existence check)
    pub asset_root: PathBuf,

    /// Upper bound on concurrent asset copies during a paste (0 when missing)
    pub max_concurrent_asset_copies: usize,

    /// Digest algorithm name (`blake3`, `sha256`, or empty)
    pub digest_algorithm: String,

    /// Directory for log files (empty when missing)
    pub log_dir: PathBuf,

    pub flags: FlagsConfig,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Only a malformed `[flags]` table is an error; everything else missing
    /// maps to an empty value.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            storage_backend: str_at("storage", "backend"),
            asset_root: PathBuf::from(str_at("storage", "asset_root")),
            max_concurrent_asset_copies: toml_value
                .get("clipboard")
                .and_then(|c| c.get("max_concurrent_asset_copies"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as usize)
                .unwrap_or(0),
            digest_algorithm: str_at("clipboard", "digest"),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
            flags: Self::flags_from_toml(toml_value.get("flags"))?,
        })
    }

    fn flags_from_toml(flags: Option<&toml::Value>) -> anyhow::Result<FlagsConfig> {
        let Some(flags) = flags else {
            return Ok(FlagsConfig::default());
        };

        let mut defaults_table = flags.as_table().cloned().unwrap_or_default();
        let courses_value = defaults_table.remove("courses");

        let defaults: CourseFlags = toml::Value::Table(defaults_table).try_into()?;
        let courses: BTreeMap<String, CourseFlagOverrides> = match courses_value {
            Some(value) => value.try_into()?,
            None => BTreeMap::new(),
        };

        Ok(FlagsConfig { defaults, courses })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            storage_backend: String::new(),
            asset_root: PathBuf::new(),
            max_concurrent_asset_copies: 0,
            digest_algorithm: String::new(),
            log_dir: PathBuf::new(),
            flags: FlagsConfig::default(),
        }
    }
}
