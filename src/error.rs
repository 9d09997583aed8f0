//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the filedelta application.
///
/// - 0: Success (hash printed, hash stored, or check matched)
/// - 1: Cache missed (check found a mismatch or no stored baseline)
/// - 2: General error (file unreadable, cache unwritable, bad configuration)
/// - 10: Argument error (no target file supplied, unparseable command line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the requested operation completed.
    Success = 0,
    /// Cache missed: the file changed or was never stored.
    CacheMissed = 1,
    /// General error: an I/O or configuration failure occurred.
    GeneralError = 2,
    /// Argument error: the command line was incomplete or invalid.
    ArgumentError = 10,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "FD000",
            Self::CacheMissed => "FD001",
            Self::GeneralError => "FD002",
            Self::ArgumentError => "FD010",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "FD002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message, including the cause chain
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}
