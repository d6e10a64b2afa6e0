//! Console report lines.
//!
//! Result lines go through [`ReportWriter`] so the stages can be pointed at
//! stdout in the binary and at an in-memory buffer in tests. Diagnostics
//! never pass through here; they go to the logging layer.

use std::io::{self, Write};

use crate::types::ImageDimensions;

/// Format the line printed for one measured image.
///
/// Both numbers are right-aligned in a 5-character field.
pub fn dimension_line(dims: &ImageDimensions) -> String {
    format!("[{}]: {:5} {:5}", dims.file_name, dims.width, dims.height)
}

/// Format the line printed after the hash-rename stage.
pub fn rename_count_line(count: usize) -> String {
    format!("rename file count: {}", count)
}

/// A writer for the human-readable report lines.
pub struct ReportWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write the rename count line.
    pub fn write_rename_count(&mut self, count: usize) -> io::Result<()> {
        self.write_line(&rename_count_line(count))
    }

    /// Write one dimension line.
    pub fn write_dimensions(&mut self, dims: &ImageDimensions) -> io::Result<()> {
        self.write_line(&dimension_line(dims))
    }

    /// Write a dimension line per item.
    pub fn write_all_dimensions(&mut self, items: &[ImageDimensions]) -> io::Result<()> {
        for item in items {
            self.write_dimensions(item)?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Get the number of lines written.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
