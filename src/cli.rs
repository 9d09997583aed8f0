//! Command-line interface definitions for filedelta.
//!
//! The CLI takes an optional command (`store` or `check`) and a target file.
//! Without a command the file's fingerprint is printed and nothing is cached.
//!
//! # Example
//!
//! ```bash
//! # Record the current fingerprint of a file
//! filedelta store config.yaml
//!
//! # Later: exit 0 if unchanged, 1 if changed or never stored
//! filedelta check config.yaml
//!
//! # Just print the fingerprint
//! filedelta config.yaml
//!
//! # Use a different cache directory
//! filedelta --cache /tmp/fd-cache check config.yaml
//! ```

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::app::Operation;

/// File change detection tool.
///
/// Stores a SHA-256 fingerprint of a file and later reports whether the
/// file's contents still match it.
#[derive(Debug, Parser)]
#[command(name = "filedelta")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Output debugging info (-d for debug, -dd for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Directory holding stored fingerprints
    ///
    /// Defaults to ~/.local/filedelta/cache.
    #[arg(short, long, value_name = "DIR", env = "FILEDELTA_CACHE", global = true)]
    pub cache: Option<PathBuf>,

    /// Path to an alternate configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Report fatal errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Output app version info
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File to fingerprint
    #[arg(value_name = "FILENAME")]
    pub file: Option<PathBuf>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compares the provided file's hash against the one stored
    Check(TargetArgs),
    /// Stores the provided file's hash for later comparison
    Store(TargetArgs),
}

/// Target file argument shared by all commands.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// File to fingerprint
    #[arg(value_name = "FILENAME")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// The operation requested on the command line.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self.command {
            Some(Commands::Check(_)) => Operation::Check,
            Some(Commands::Store(_)) => Operation::Store,
            None => Operation::Hash,
        }
    }

    /// The target file, if one was supplied.
    #[must_use]
    pub fn target(&self) -> Option<&Path> {
        match &self.command {
            Some(Commands::Check(args) | Commands::Store(args)) => args.file.as_deref(),
            None => self.file.as_deref(),
        }
    }

    /// Rendered help text.
    #[must_use]
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
