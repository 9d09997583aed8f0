//! Cache key derivation.
//!
//! A cache key is the lowercase hex SHA-256 of the canonical path's raw OS
//! bytes. Keys are 64 characters from `[0-9a-f]`, so they are safe as file
//! names on every platform. Keying is by path, never by content.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Storage identifier for one tracked path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// The key as a file name token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the cache key for an absolute, canonical path.
///
/// The path's bytes are hashed exactly as the OS reports them, so two
/// paths that differ in any byte (including Unicode normalization form or
/// invalid UTF-8 sequences) get distinct keys.
#[must_use]
pub fn derive_key(absolute_path: &Path) -> CacheKey {
    let digest = Sha256::digest(absolute_path.as_os_str().as_encoded_bytes());
    CacheKey(format!("{:x}", digest))
}
