//! Hex-encoded SHA-256 fingerprints.

use std::fmt;
use std::str::FromStr;

use sha2::digest::Output;
use sha2::Sha256;

/// Length of a fingerprint in hex characters (256 bits).
pub const FINGERPRINT_LEN: usize = 64;

/// Fingerprint of zero-length input.
pub const EMPTY_FINGERPRINT: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// A 64 character lowercase hexadecimal SHA-256 digest.
///
/// Fingerprints compare by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

/// Error returned when text is not a valid fingerprint.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerprintParseError {
    /// Wrong number of characters.
    #[error("expected {FINGERPRINT_LEN} hex characters, found {0}")]
    InvalidLength(usize),

    /// A non-hex character was found.
    #[error("invalid hex character {0:?}")]
    InvalidCharacter(char),

    /// The stored bytes are not UTF-8 text.
    #[error("contents are not valid UTF-8")]
    InvalidEncoding,
}

impl Fingerprint {
    /// Encode finalized SHA-256 output as a fingerprint.
    #[must_use]
    pub fn from_digest(digest: Output<Sha256>) -> Self {
        Self(format!("{:x}", digest))
    }

    /// Parse a fingerprint from hex text.
    ///
    /// Upper-case digits are accepted and normalized to lower case.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not exactly 64 hex digits.
    pub fn from_hex(s: &str) -> Result<Self, FingerprintParseError> {
        let len = s.chars().count();
        if len != FINGERPRINT_LEN {
            return Err(FingerprintParseError::InvalidLength(len));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(FingerprintParseError::InvalidCharacter(c));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// The hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the fingerprint of empty input.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        self.0 == EMPTY_FINGERPRINT
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
