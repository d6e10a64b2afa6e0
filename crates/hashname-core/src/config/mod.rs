//! Configuration management for hashname.
//!
//! Every setting has a default, so the tool runs without any config file.
//! A TOML file is only read when a caller names one explicitly.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for hashname.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Hash-rename stage settings
    pub rename: RenameConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Ok(Self::load_from(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Get the resolved target directory path (with ~ expansion).
    pub fn target_dir(&self) -> PathBuf {
        let path_str = self.general.target_dir.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.target_dir, PathBuf::from("png"));
        assert_eq!(config.rename.on_collision, CollisionPolicy::Overwrite);
        assert_eq!(config.rename.buffer_size, 65536);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[rename]"));
        assert!(toml.contains("on_collision = \"overwrite\""));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.general.target_dir, PathBuf::from("png"));
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashname.toml");
        std::fs::write(
            &path,
            "[general]\ntarget_dir = \"photos\"\n\n[rename]\non_collision = \"skip\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.target_dir, PathBuf::from("photos"));
        assert_eq!(config.rename.on_collision, CollisionPolicy::Skip);
        // Unset fields keep their defaults
        assert_eq!(config.rename.buffer_size, 65536);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_with_path_reports_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashname.toml");
        std::fs::write(&path, "[rename]\nbuffer_size = 0\n").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(
            err,
            crate::HashnameError::Config(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashname.toml");
        std::fs::write(&path, "[rename\non_collision = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/hashname.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_target_dir_plain_relative_path_unchanged() {
        let config = Config::default();
        assert_eq!(config.target_dir(), PathBuf::from("png"));
    }
}
