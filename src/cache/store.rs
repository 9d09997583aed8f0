//! Directory-backed fingerprint store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{derive_key, CacheEntry, CacheKey, StoreError, StoreResult};
use crate::digest::{Fingerprint, FingerprintParseError};
use crate::tracked::TrackedFile;

/// Persistent map from cache key to the last stored fingerprint.
///
/// Each key is one file inside `root`. Writes overwrite in place; concurrent
/// writers on the same key are not coordinated (last writer wins).
#[derive(Debug, Clone)]
pub struct FingerprintStore {
    root: PathBuf,
}

impl FingerprintStore {
    /// Open a store rooted at `root`.
    ///
    /// No I/O happens here; the directory is created on the first
    /// [`put`](Self::put).
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the entry for `key` lives.
    #[must_use]
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.as_str())
    }

    /// Persist `fingerprint` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CreateDir`] if the cache directory cannot be
    /// created and [`StoreError::Write`] if the entry cannot be written.
    pub fn put(&self, key: &CacheKey, fingerprint: &Fingerprint) -> StoreResult<()> {
        self.ensure_root()?;

        let path = self.entry_path(key);
        fs::write(&path, fingerprint.as_str()).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        log::debug!("Stored {} in {}", fingerprint, path.display());
        Ok(())
    }

    /// Fetch the fingerprint stored under `key`.
    ///
    /// A missing entry is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] on I/O failure and
    /// [`StoreError::Corrupted`] if the entry does not hold a fingerprint.
    pub fn get(&self, key: &CacheKey) -> StoreResult<Option<Fingerprint>> {
        Ok(self.entry(key)?.map(|entry| entry.fingerprint))
    }

    /// Fetch the full entry stored under `key`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn entry(&self, key: &CacheKey) -> StoreResult<Option<CacheEntry>> {
        let path = self.entry_path(key);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No cache entry at {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let fingerprint = String::from_utf8(bytes)
            .map_err(|_| FingerprintParseError::InvalidEncoding)
            .and_then(|contents| Fingerprint::from_hex(contents.trim_end()))
            .map_err(|source| StoreError::Corrupted {
                path: path.clone(),
                source,
            })?;

        Ok(Some(CacheEntry {
            key: key.clone(),
            fingerprint,
            path,
        }))
    }

    /// Persist the fingerprint of a tracked file under its derived key.
    ///
    /// # Errors
    ///
    /// Same as [`put`](Self::put).
    pub fn store_file(&self, file: &TrackedFile, fingerprint: &Fingerprint) -> StoreResult<()> {
        self.put(&derive_key(file.canonical_path()), fingerprint)
    }

    /// Fetch the baseline fingerprint of a tracked file.
    ///
    /// A missing entry is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn baseline(&self, file: &TrackedFile) -> StoreResult<Option<Fingerprint>> {
        self.get(&derive_key(file.canonical_path()))
    }

    fn ensure_root(&self) -> StoreResult<()> {
        if self.root.is_dir() {
            return Ok(());
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }

        builder
            .create(&self.root)
            .map_err(|source| StoreError::CreateDir {
                path: self.root.clone(),
                source,
            })?;

        log::debug!("Created cache directory {}", self.root.display());
        Ok(())
    }
}
