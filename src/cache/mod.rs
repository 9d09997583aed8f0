//! Fingerprint cache for filedelta.
//!
//! This module persists the most recent fingerprint of each tracked file so
//! that a later `check` can tell whether the file changed.
//!
//! # Architecture
//!
//! * [`key`]: Derives a filesystem-safe key from a canonical path.
//! * [`store`]: Reads and writes one entry file per key in the cache directory.
//! * [`entry`]: Defines the record returned for a stored key.
//!
//! # Layout
//!
//! ```text
//! ~/.local/filedelta/cache/
//!     <sha256 of canonical path bytes>   -> "<sha256 of file contents>"
//! ```
//!
//! Entries are never versioned or pruned; a store overwrites the previous
//! value for the same path.

pub mod entry;
pub mod key;
pub mod store;

use std::path::PathBuf;

pub use entry::CacheEntry;
pub use key::{derive_key, CacheKey};
pub use store::FingerprintStore;

use crate::digest::FingerprintParseError;

/// Errors raised by the fingerprint store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The cache directory could not be created.
    #[error("Failed to create cache directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A cache entry could not be written.
    #[error("Failed to write cache entry {path}: {source}")]
    Write {
        /// Entry file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A cache entry exists but could not be read.
    #[error("Failed to read cache entry {path}: {source}")]
    Read {
        /// Entry file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A cache entry does not contain a valid fingerprint.
    #[error("Corrupted cache entry {path}: {source}")]
    Corrupted {
        /// Entry file path
        path: PathBuf,
        /// Why the contents were rejected
        #[source]
        source: FingerprintParseError,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
