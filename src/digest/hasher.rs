//! SHA-256 file hasher with streaming support.
//!
//! # Overview
//! This module provides the `Hasher` struct for computing SHA-256 hashes
//! of file contents using memory-efficient streaming. Files are consumed
//! in fixed-size chunks, so arbitrarily large files never need to be
//! resident in memory.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::{DigestError, Fingerprint};

/// Default read buffer size (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Streaming SHA-256 hasher for file contents.
///
/// # Example
///
/// ```no_run
/// use filedelta::digest::Hasher;
/// use std::path::Path;
///
/// let hasher = Hasher::new();
/// let fp = hasher.hash_file(Path::new("data.bin")).unwrap();
/// assert_eq!(fp.as_str().len(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Hasher {
    buffer_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher with the default buffer size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create a hasher that reads in chunks of `buffer_size` bytes.
    ///
    /// A zero size is clamped to one byte.
    #[must_use]
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// The configured read chunk size.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Compute the fingerprint of a file's full contents.
    ///
    /// # Errors
    ///
    /// Returns a [`DigestError`] if the file cannot be opened or read.
    /// An empty file is not an error; it hashes to
    /// [`EMPTY_FINGERPRINT`](super::EMPTY_FINGERPRINT).
    pub fn hash_file(&self, path: &Path) -> Result<Fingerprint, DigestError> {
        let file = File::open(path).map_err(|e| DigestError::from_io(path.to_path_buf(), e))?;

        let metadata = file
            .metadata()
            .map_err(|e| DigestError::from_io(path.to_path_buf(), e))?;
        if metadata.is_dir() {
            return Err(DigestError::IsADirectory(path.to_path_buf()));
        }

        let fingerprint = self
            .hash_reader(file)
            .map_err(|e| DigestError::from_io(path.to_path_buf(), e))?;

        log::trace!(
            "Hashed {} ({} bytes): {}",
            path.display(),
            metadata.len(),
            fingerprint
        );
        Ok(fingerprint)
    }

    /// Compute the fingerprint of everything readable from `reader`.
    ///
    /// Interrupted reads are retried.
    ///
    /// # Errors
    ///
    /// Returns the first non-interrupt I/O error from the reader.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<Fingerprint> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buffer[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(Fingerprint::from_digest(hasher.finalize()))
    }

    /// Compute the fingerprint of an in-memory byte slice.
    #[must_use]
    pub fn hash_bytes(&self, bytes: &[u8]) -> Fingerprint {
        Fingerprint::from_digest(Sha256::digest(bytes))
    }
}
