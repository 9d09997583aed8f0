//! Digest engine for file content fingerprints.
//!
//! This module provides functionality for:
//! - Streaming SHA-256 hashing of file contents
//! - The [`Fingerprint`] type (64 lowercase hex characters)
//!
//! # Architecture
//!
//! - [`hasher`]: chunked SHA-256 hashing of files and readers
//! - [`fingerprint`]: parsing and display of hex fingerprints
//!
//! # Example
//!
//! ```no_run
//! use filedelta::digest::Hasher;
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let fingerprint = hasher.hash_file(Path::new("Cargo.toml")).unwrap();
//! println!("{fingerprint}");
//! ```

pub mod fingerprint;
pub mod hasher;

use std::path::PathBuf;

pub use fingerprint::{Fingerprint, FingerprintParseError, EMPTY_FINGERPRINT, FINGERPRINT_LEN};
pub use hasher::{Hasher, DEFAULT_BUFFER_SIZE};

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The path names a directory, which cannot be fingerprinted.
    #[error("Is a directory: {0}")]
    IsADirectory(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl DigestError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source },
        }
    }
}
