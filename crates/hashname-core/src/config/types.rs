//! Sub-configuration structs and their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory whose direct children are renamed and measured
    pub target_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("png"),
        }
    }
}

/// What to do when the hash-derived name is already taken by another file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Hand the rename to the platform (replaces the target on Unix)
    #[default]
    Overwrite,
    /// Leave the source file under its current name
    Skip,
}

/// Hash-rename stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Collision handling when two files hash to the same name
    pub on_collision: CollisionPolicy,

    /// Read buffer size in bytes used while hashing
    pub buffer_size: usize,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            on_collision: CollisionPolicy::Overwrite,
            buffer_size: 64 * 1024,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
