//! Core data types produced by the two pipeline stages.

use std::path::PathBuf;

use crate::error::PipelineError;

/// What happened to a single file during the hash-rename stage.
#[derive(Debug)]
pub enum RenameOutcome {
    /// File was moved to its hash-derived name
    Renamed { from: PathBuf, to: PathBuf },
    /// File already carried its hash-derived name
    Unchanged(PathBuf),
    /// File was left alone; the error says why
    Failed(PipelineError),
}

/// Totals for one run of the hash-rename stage.
#[derive(Debug, Default)]
pub struct RenameSummary {
    /// Entries returned by the directory listing, directories included
    pub visited: usize,
    /// Files moved to a new name
    pub renamed: usize,
    /// Files whose name already matched their hash
    pub unchanged: usize,
    /// Subdirectories passed over
    pub directories: usize,
    /// Per-file errors, in listing order
    pub failures: Vec<PipelineError>,
}

impl RenameSummary {
    pub(crate) fn record(&mut self, outcome: RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::Unchanged(_) => self.unchanged += 1,
            RenameOutcome::Failed(err) => self.failures.push(err),
        }
    }
}

/// Pixel dimensions parsed from an image header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDimensions {
    /// Just the filename portion
    pub file_name: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Detected format ("png", "jpeg", ...)
    pub format: String,
}

/// Results of one run of the dimension-report stage.
#[derive(Debug, Default)]
pub struct DimensionSummary {
    /// Successfully measured images, in listing order
    pub reported: Vec<ImageDimensions>,
    /// Per-file errors, in listing order
    pub failures: Vec<PipelineError>,
}
