//! Operation dispatch: resolve the target, hash it, then store or check.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cache::{derive_key, FingerprintStore, StoreError};
use crate::cli::Cli;
use crate::config::Config;
use crate::digest::{Fingerprint, Hasher};
use crate::error::ExitCode;
use crate::output;
use crate::tracked::TrackedFile;

/// What to do with the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Print the fingerprint only.
    Hash,
    /// Print and persist the fingerprint.
    Store,
    /// Compare the fingerprint against the stored baseline.
    Check,
}

/// Result of comparing a fresh fingerprint against the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The file is unchanged.
    Matched,
    /// The file changed since the baseline was stored.
    Mismatched {
        /// The previously stored fingerprint
        baseline: Fingerprint,
    },
    /// No usable baseline exists for this path.
    NoBaseline,
}

impl CheckOutcome {
    /// Compare a freshly computed fingerprint with an optional baseline.
    #[must_use]
    pub fn compare(actual: &Fingerprint, baseline: Option<Fingerprint>) -> Self {
        match baseline {
            None => Self::NoBaseline,
            Some(baseline) if baseline.as_str() == actual.as_str() => Self::Matched,
            Some(baseline) => Self::Mismatched { baseline },
        }
    }

    /// Whether the file matched its baseline.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }

    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_match() {
            ExitCode::Success
        } else {
            ExitCode::CacheMissed
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Requested operation
    pub operation: Operation,
    /// Target file as supplied by the user
    pub file: PathBuf,
    /// Cache directory
    pub cache_dir: PathBuf,
    /// Read chunk size for hashing
    pub buffer_size: usize,
}

impl RunConfig {
    /// Merge CLI arguments with loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails if no cache directory can be determined.
    pub fn new(
        operation: Operation,
        file: &Path,
        cache_override: Option<&Path>,
        config: &Config,
    ) -> Result<Self> {
        let cache_dir = config
            .resolve_cache_dir(cache_override)
            .context("Failed to determine cache directory")?;

        Ok(Self {
            operation,
            file: file.to_path_buf(),
            cache_dir,
            buffer_size: config.buffer_size,
        })
    }
}

/// Run the application for parsed CLI arguments.
///
/// Returns the exit code for normal outcomes, including a missing target
/// file and a failed check. I/O and configuration failures are returned as
/// errors.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the file cannot be
/// read, or the cache cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let Some(file) = cli.target() else {
        println!("{}", Cli::help_text());
        return Ok(ExitCode::ArgumentError);
    };

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let run = RunConfig::new(cli.operation(), file, cli.cache.as_deref(), &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&run, &mut out)
}

/// Execute one resolved invocation, writing the result line to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the cache cannot be
/// written or read, or `out` fails.
pub fn execute<W: Write>(run: &RunConfig, out: &mut W) -> Result<ExitCode> {
    let tracked = TrackedFile::resolve(&run.file)
        .with_context(|| format!("Failed to resolve {}", run.file.display()))?;
    let fingerprint = Hasher::with_buffer_size(run.buffer_size)
        .hash_file(tracked.canonical_path())
        .with_context(|| format!("Failed to hash {}", run.file.display()))?;

    log::debug!("File: {}", tracked.canonical_path().display());
    log::debug!("File Hash: {fingerprint}");

    match run.operation {
        Operation::Hash => {
            writeln!(out, "{}", output::digest_line(&fingerprint, &tracked))?;
            Ok(ExitCode::Success)
        }
        Operation::Store => {
            let store = FingerprintStore::open(&run.cache_dir);
            log::debug!(
                "Cache File: {}",
                store
                    .entry_path(&derive_key(tracked.canonical_path()))
                    .display()
            );

            store
                .store_file(&tracked, &fingerprint)
                .with_context(|| format!("Failed to store hash for {}", run.file.display()))?;
            writeln!(out, "{}", output::digest_line(&fingerprint, &tracked))?;
            Ok(ExitCode::Success)
        }
        Operation::Check => {
            let store = FingerprintStore::open(&run.cache_dir);
            let outcome = check(&store, &tracked, &fingerprint)?;
            writeln!(out, "{}", output::check_line(&tracked, &outcome))?;
            Ok(outcome.exit_code())
        }
    }
}

/// Compare `fingerprint` against the baseline stored for `tracked`.
///
/// A corrupted entry is reported as a warning and treated as no baseline.
///
/// # Errors
///
/// Returns an error if the entry exists but cannot be read.
pub fn check(
    store: &FingerprintStore,
    tracked: &TrackedFile,
    fingerprint: &Fingerprint,
) -> Result<CheckOutcome> {
    log::debug!(
        "Cache File: {}",
        store
            .entry_path(&derive_key(tracked.canonical_path()))
            .display()
    );

    let baseline = match store.baseline(tracked) {
        Ok(baseline) => baseline,
        Err(err @ StoreError::Corrupted { .. }) => {
            log::warn!("{err}; treating as no baseline");
            None
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read stored hash for {tracked}"))
        }
    };

    match &baseline {
        Some(baseline) => log::debug!("Cache Hash: {baseline}"),
        None => log::debug!("Cache Hash: <none>"),
    }

    Ok(CheckOutcome::compare(fingerprint, baseline))
}
