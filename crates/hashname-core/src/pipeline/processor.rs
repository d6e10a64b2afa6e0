//! Pipeline orchestration - runs the two stages in order.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::output::ReportWriter;
use crate::types::{DimensionSummary, RenameSummary};

use super::dimensions::DimensionReader;
use super::rename::Renamer;

/// Outcome of a full run.
#[derive(Debug)]
pub struct RunReport {
    pub rename: RenameSummary,
    pub dimensions: DimensionSummary,
}

/// Runs the hash-rename and dimension-report stages over a directory.
pub struct Processor {
    renamer: Renamer,
    reader: DimensionReader,
}

impl Processor {
    /// Create a new processor with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            renamer: Renamer::new(&config.rename),
            reader: DimensionReader::new(),
        }
    }

    /// Hash-rename every file in `dir`, then print the rename count.
    pub fn rename<W: Write>(
        &self,
        dir: &Path,
        out: &mut ReportWriter<W>,
    ) -> Result<RenameSummary> {
        let start = std::time::Instant::now();
        let summary = self.renamer.run(dir)?;
        out.write_rename_count(summary.visited)?;
        out.flush()?;

        tracing::info!(
            "Hash-rename done in {:?}: {} renamed, {} unchanged, {} failed",
            start.elapsed(),
            summary.renamed,
            summary.unchanged,
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Print the dimensions of every image in `dir`.
    pub fn dimensions<W: Write>(
        &self,
        dir: &Path,
        out: &mut ReportWriter<W>,
    ) -> Result<DimensionSummary> {
        let summary = self.reader.run(dir)?;
        out.write_all_dimensions(&summary.reported)?;
        out.flush()?;

        tracing::info!(
            "Dimension report done: {} measured, {} failed",
            summary.reported.len(),
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Run both stages. The second stage lists `dir` again from scratch.
    pub fn run<W: Write>(&self, dir: &Path, out: &mut ReportWriter<W>) -> Result<RunReport> {
        let rename = self.rename(dir, out)?;
        let dimensions = self.dimensions(dir, out)?;
        Ok(RunReport { rename, dimensions })
    }
}
