//! Application configuration management.
//!
//! Settings are merged by figment, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config <FILE>` or the platform config directory)
//! 3. `FILEDELTA_*` environment variables
//! 4. CLI flags, applied by the caller
//!
//! ```toml
//! # ~/.config/filedelta/config.toml
//! cache_dir = "/var/tmp/filedelta"
//! buffer_size = 131072
//! ```

use directories::{BaseDirs, ProjectDirs};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::digest::DEFAULT_BUFFER_SIZE;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "FILEDELTA_";

/// Cache location relative to the home directory.
const DEFAULT_CACHE_SUBDIR: &str = ".local/filedelta/cache";

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A configuration source could not be parsed or extracted.
    #[error("Invalid configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// The read buffer size was zero.
    #[error("buffer_size must be greater than zero")]
    InvalidBufferSize,

    /// No home directory was found for the default cache location.
    #[error("Could not determine the home directory; pass --cache")]
    NoHomeDirectory,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache directory; `None` means `~/.local/filedelta/cache`.
    pub cache_dir: Option<PathBuf>,
    /// Read chunk size for hashing, in bytes.
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or the result fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = path.map(Path::to_path_buf).or_else(Self::default_config_path);
        let config: Self = Self::figment(file.as_deref())
            .extract()
            .map_err(Box::new)?;
        config.validate()?;

        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    /// The layered provider stack used by [`load`](Self::load).
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = file {
            log::trace!("Reading configuration file {}", file.display());
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).only(&["cache_dir", "buffer_size"]))
    }

    /// Check value constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBufferSize`] for a zero buffer size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidBufferSize);
        }
        Ok(())
    }

    /// The cache directory to use, applying the CLI override first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if no directory is configured
    /// and the home directory is unknown.
    pub fn resolve_cache_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = cli_override.or(self.cache_dir.as_deref()) {
            return Ok(dir.to_path_buf());
        }
        default_cache_dir().ok_or(ConfigError::NoHomeDirectory)
    }

    /// Get the default platform-specific configuration path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "filedelta", "filedelta")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// `~/.local/filedelta/cache`, if a home directory exists.
#[must_use]
pub fn default_cache_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_CACHE_SUBDIR))
}
