//! Cache entry definitions.

use std::path::PathBuf;

use super::CacheKey;
use crate::digest::Fingerprint;

/// A single persisted fingerprint record.
///
/// On disk this is a file named by [`CacheKey`] whose contents are the raw
/// hex fingerprint, with no trailing newline or other wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Key derived from the tracked file's canonical path
    pub key: CacheKey,
    /// Most recently stored fingerprint
    pub fingerprint: Fingerprint,
    /// Location of the entry file inside the cache directory
    pub path: PathBuf,
}
