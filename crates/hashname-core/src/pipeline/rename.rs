//! Hash-rename stage: move every file in a directory to `<HASH><ext>`.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::config::{CollisionPolicy, RenameConfig};
use crate::error::{PipelineError, PipelineResult};
use crate::types::{RenameOutcome, RenameSummary};

use super::discovery::{list_dir, DirEntry};
use super::hash::Hasher;

/// Extension of `file_name`: the suffix from the last `.`, dot included.
///
/// `photo.PNG` gives `.PNG`, `archive.tar.gz` gives `.gz`, `readme` gives
/// an empty string, and `.hidden` is all extension. The name is split on
/// raw bytes, so an extension that is not valid UTF-8 survives untouched.
#[cfg(unix)]
pub fn file_extension(file_name: &OsStr) -> &OsStr {
    use std::os::unix::ffi::OsStrExt;

    let bytes = file_name.as_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(idx) => OsStr::from_bytes(&bytes[idx..]),
        None => OsStr::new(""),
    }
}

/// Extension of `file_name`: the suffix from the last `.`, dot included.
#[cfg(not(unix))]
pub fn file_extension(file_name: &OsStr) -> &OsStr {
    let bytes = file_name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        // SAFETY: the split lands right before an ASCII `.`, which is a
        // valid boundary of the platform encoding.
        Some(idx) => unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[idx..]) },
        None => OsStr::new(""),
    }
}

/// Name a file with content hash `hash` should carry.
pub fn hashed_name(hash: &str, original_name: &OsStr) -> OsString {
    let mut name = OsString::from(hash);
    name.push(file_extension(original_name));
    name
}

/// Renames files to their content hash.
pub struct Renamer {
    hasher: Hasher,
    on_collision: CollisionPolicy,
}

impl Renamer {
    /// Create a renamer from the rename settings.
    pub fn new(config: &RenameConfig) -> Self {
        Self {
            hasher: Hasher::new(config.buffer_size),
            on_collision: config.on_collision,
        }
    }

    /// Run the stage over the direct children of `dir`.
    ///
    /// Fails only when `dir` cannot be listed. Per-file problems are logged,
    /// collected in the summary, and the file is left under its old name.
    pub fn run(&self, dir: &Path) -> PipelineResult<RenameSummary> {
        let entries = list_dir(dir)?;
        tracing::debug!("Hash-rename: {} entries in {:?}", entries.len(), dir);

        let mut summary = RenameSummary {
            visited: entries.len(),
            ..Default::default()
        };

        for entry in &entries {
            if entry.is_dir {
                summary.directories += 1;
                continue;
            }

            let outcome = self.rename_entry(dir, entry);
            match &outcome {
                RenameOutcome::Renamed { from, to } => {
                    tracing::debug!("Renamed {:?} -> {:?}", from, to);
                }
                RenameOutcome::Unchanged(path) => {
                    tracing::debug!("Already named by hash: {:?}", path);
                }
                RenameOutcome::Failed(err) => {
                    tracing::warn!(file = %entry.file_name, "{}", err);
                }
            }
            summary.record(outcome);
        }

        Ok(summary)
    }

    /// Hash one file and move it to its hash-derived name.
    pub fn rename_entry(&self, dir: &Path, entry: &DirEntry) -> RenameOutcome {
        match self.try_rename(dir, entry) {
            Ok(outcome) => outcome,
            Err(err) => RenameOutcome::Failed(err),
        }
    }

    fn try_rename(&self, dir: &Path, entry: &DirEntry) -> PipelineResult<RenameOutcome> {
        let hash = self.hasher.content_hash(&entry.path)?;
        let new_name = hashed_name(&hash, &entry.name);

        if new_name == entry.name {
            return Ok(RenameOutcome::Unchanged(entry.path.clone()));
        }

        let target = dir.join(&new_name);
        if self.on_collision == CollisionPolicy::Skip && target.exists() {
            return Err(PipelineError::Collision {
                from: entry.path.clone(),
                to: target,
            });
        }

        std::fs::rename(&entry.path, &target).map_err(|source| PipelineError::Rename {
            from: entry.path.clone(),
            to: target.clone(),
            source,
        })?;

        Ok(RenameOutcome::Renamed {
            from: entry.path.clone(),
            to: target,
        })
    }
}
