//! Pipeline components.
//!
//! - **discovery**: List the direct children of the target directory
//! - **hash**: MD5 content hashing
//! - **rename**: Hash-rename stage
//! - **dimensions**: Header-only dimension report stage
//! - **processor**: Runs both stages in order

pub mod dimensions;
pub mod discovery;
pub mod hash;
pub mod processor;
pub mod rename;

// Re-exports for convenient access
pub use dimensions::DimensionReader;
pub use discovery::{list_dir, DirEntry};
pub use hash::Hasher;
pub use processor::{Processor, RunReport};
pub use rename::{file_extension, hashed_name, Renamer};
