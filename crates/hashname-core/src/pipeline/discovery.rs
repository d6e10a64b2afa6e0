//! Directory listing for the pipeline stages.
//!
//! Each stage lists the target directory on its own; nothing is cached
//! between calls.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, PipelineResult};

/// A direct child of the target directory.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// Entry name exactly as the filesystem returned it
    pub name: OsString,
    /// Entry name, lossily converted for display and logging
    pub file_name: String,
    /// Whether the entry is a directory (symlinks are not followed)
    pub is_dir: bool,
}

/// List the direct children of `dir`, sorted by file name.
///
/// Any error while reading the listing is fatal for the calling stage.
pub fn list_dir(dir: &Path) -> PipelineResult<Vec<DirEntry>> {
    let list_err = |source: std::io::Error| PipelineError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_type = entry.file_type().map_err(list_err)?;
        entries.push(DirEntry {
            path: entry.path(),
            file_name: entry.file_name().to_string_lossy().into_owned(),
            name: entry.file_name(),
            is_dir: file_type.is_dir(),
        });
    }

    // Sort by name for deterministic ordering
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
