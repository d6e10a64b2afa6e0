//! Content hashing used to derive new file names.

use md5::{Digest, Md5};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

/// Default read buffer for streaming file content into the digest.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Streams file content through MD5 and renders the digest as uppercase hex.
#[derive(Debug, Clone)]
pub struct Hasher {
    buffer_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl Hasher {
    /// Create a hasher that reads `buffer_size` bytes at a time.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Hash the full content of the file at `path`.
    ///
    /// The file is never loaded whole; it is read in `buffer_size` chunks
    /// and closed before this returns, on success or failure.
    pub fn content_hash(&self, path: &Path) -> PipelineResult<String> {
        let file = File::open(path).map_err(|source| PipelineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::with_capacity(self.buffer_size, file);
        let mut hasher = Md5::new();

        let mut buffer = vec![0u8; self.buffer_size];
        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(PipelineError::Read {
                        path: path.to_path_buf(),
                        source,
                    })
                }
            };
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(format!("{:X}", hasher.finalize()))
    }

    /// Hash an in-memory byte buffer.
    pub fn content_hash_from_bytes(data: &[u8]) -> String {
        format!("{:X}", Md5::digest(data))
    }
}
