//! Error types for hashname.
//!
//! Errors are organized by stage so every message carries the file or
//! directory it concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for hashname operations.
#[derive(Error, Debug)]
pub enum HashnameError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
///
/// Only [`PipelineError::ListDir`] aborts a stage; every other variant is
/// reported per file and the stage moves on.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The target directory could not be listed
    #[error("read dir failure: {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be opened
    #[error("open file failure: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading file content failed mid-stream
    #[error("read failure: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming a file failed
    #[error("rename failure: {from} -> {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target name is already held by another file
    #[error("rename target already exists: {from} -> {to}")]
    Collision { from: PathBuf, to: PathBuf },

    /// Image header could not be parsed
    #[error("decode file failure: {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Content does not match any known image format
    #[error("unsupported format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl PipelineError {
    /// Whether this error stops the whole stage rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PipelineError::ListDir { .. })
    }
}

/// Convenience type alias for hashname results.
pub type Result<T> = std::result::Result<T, HashnameError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
