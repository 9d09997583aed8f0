//! Result line rendering.
//!
//! Lines follow the `sha256sum` conventions so they can be compared against
//! or fed to other checksum tooling.

use std::fmt::Display;

use crate::app::CheckOutcome;
use crate::digest::Fingerprint;

/// `<fingerprint> *<file>`, printed by `store` and the default operation.
#[must_use]
pub fn digest_line(fingerprint: &Fingerprint, file: impl Display) -> String {
    format!("{fingerprint} *{file}")
}

/// `<file>: OK` or `<file>: ERROR`, printed by `check`.
#[must_use]
pub fn check_line(file: impl Display, outcome: &CheckOutcome) -> String {
    let status = if outcome.is_match() { "OK" } else { "ERROR" };
    format!("{file}: {status}")
}
