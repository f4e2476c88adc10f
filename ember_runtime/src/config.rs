//! Runtime configuration, read from a TOML file.

use ember_core::Bounds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Scene JSON to load. `None` runs the built-in demo scene.
    pub scene: Option<PathBuf>,

    /// Number of simulation steps to run.
    pub ticks: u64,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Playfield limits for the bounce system.
    pub bounds: Bounds,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scene: None,
            ticks: 600,
            log_filter: "info".to_string(),
            bounds: Bounds::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config file. A relative `scene` path is resolved against the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&source)?;

        if let (Some(scene), Some(dir)) = (&config.scene, path.parent()) {
            if scene.is_relative() {
                config.scene = Some(dir.join(scene));
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_toml_str("").expect("empty config is valid");

        assert!(config.scene.is_none());
        assert_eq!(config.ticks, 600);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.bounds, Bounds::default());
    }

    #[test]
    fn test_partial_override() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            ticks = 10
            [bounds]
            width = 320.0
            height = 240.0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.ticks, 10);
        assert_eq!(config.bounds.width, 320.0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let err = RuntimeConfig::from_toml_str("ticks = \"many\"")
            .expect_err("ticks must be a number");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RuntimeConfig::from_file("/definitely/not/here.toml")
            .expect_err("no such file");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
