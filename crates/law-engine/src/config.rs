//! Engine configuration
//!
//! Every field has a default, so an empty TOML document is a valid config.
//!
//! ```toml
//! catalog_path = "/var/lib/lawdiff/law_catalog.json"
//! critical_limit = 3
//! notification_max_lines = 2
//! ```

use crate::diff::DEFAULT_CRITICAL_LIMIT;
use crate::error::CatalogError;
use crate::notification::DEFAULT_MAX_LINES;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// External catalog file; the embedded catalog is used when absent.
    /// A relative path read by [`EngineConfig::from_file`] is taken relative
    /// to the config file's directory.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Entries returned by critical-difference queries
    #[serde(default = "default_critical_limit")]
    pub critical_limit: usize,
    /// Difference lines in a notification body
    #[serde(default = "default_max_lines")]
    pub notification_max_lines: usize,
}

fn default_critical_limit() -> usize {
    DEFAULT_CRITICAL_LIMIT
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            critical_limit: DEFAULT_CRITICAL_LIMIT,
            notification_max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_str(&content)?;

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        config.catalog_path = config.catalog_path.map(|catalog| {
            if catalog.is_relative() {
                dir.join(catalog)
            } else {
                catalog
            }
        });
        Ok(config)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.critical_limit, 3);
        assert_eq!(config.notification_max_lines, 2);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_str(
            r#"
            catalog_path = "catalog.json"
            critical_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.critical_limit, 5);
        assert_eq!(config.notification_max_lines, 2);
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = EngineConfig::from_str("critical_limit = \"many\"").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigError(_)));
    }

    #[test]
    fn test_relative_catalog_path_follows_config_file() {
        let dir = std::env::temp_dir().join(format!("law-engine-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("engine.toml");
        fs::write(
            &path,
            "catalog_path = \"data/catalog.json\"\ncritical_limit = 4\n",
        )
        .unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_path, Some(dir.join("data/catalog.json")));
        assert_eq!(config.critical_limit, 4);

        fs::write(&path, "catalog_path = \"/srv/catalog.json\"\n").unwrap();
        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));

        fs::remove_dir_all(&dir).ok();
    }
}
