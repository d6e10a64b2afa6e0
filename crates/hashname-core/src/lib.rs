//! hashname core - rename images to their content hash and report sizes.
//!
//! Two stages run over one directory, one after the other:
//!
//! ```text
//! list dir → MD5 each file → rename to <HASH><ext>
//! list dir → parse image header → print [name]: width height
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use hashname_core::{Config, Processor, ReportWriter};
//!
//! fn main() -> hashname_core::Result<()> {
//!     let config = Config::default();
//!     let processor = Processor::new(&config);
//!     let mut out = ReportWriter::new(std::io::stdout().lock());
//!     processor.run(&config.target_dir(), &mut out)?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::{CollisionPolicy, Config};
pub use error::{ConfigError, HashnameError, PipelineError, PipelineResult, Result};
pub use output::ReportWriter;
pub use pipeline::{DimensionReader, Hasher, Processor, Renamer, RunReport};
pub use types::{DimensionSummary, ImageDimensions, RenameOutcome, RenameSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
