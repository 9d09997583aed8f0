//! Tracked file path resolution.
//!
//! Every cache interaction is keyed by the file's canonical absolute path,
//! so that relative spellings, `.`/`..` components and symlinks all resolve
//! to the same cache entry. Canonicalization uses [`dunce::canonicalize`],
//! which resolves symlinks and `..`/`.` and avoids `\\?\` prefixes on
//! Windows. The resulting path is hashed byte-for-byte by
//! [`derive_key`](crate::cache::derive_key).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::digest::DigestError;

/// A file whose content fingerprint is tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    /// Path as supplied by the caller, kept for display.
    display: PathBuf,
    /// Canonical absolute path, as reported by the filesystem.
    canonical: PathBuf,
}

impl TrackedFile {
    /// Resolve a user-supplied path to its canonical form.
    ///
    /// # Errors
    ///
    /// Returns a [`DigestError`] if the path does not exist or one of its
    /// components cannot be traversed.
    pub fn resolve(path: &Path) -> Result<Self, DigestError> {
        let canonical =
            dunce::canonicalize(path).map_err(|e| DigestError::from_io(path.to_path_buf(), e))?;

        Ok(Self {
            display: path.to_path_buf(),
            canonical,
        })
    }

    /// The path as the user typed it.
    #[must_use]
    pub fn display_path(&self) -> &Path {
        &self.display
    }

    /// The canonical absolute path, used for hashing and cache keys.
    #[must_use]
    pub fn canonical_path(&self) -> &Path {
        &self.canonical
    }
}

impl fmt::Display for TrackedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display.display())
    }
}
