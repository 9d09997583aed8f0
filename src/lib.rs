//! FileDelta - File change detection tool
//!
//! Stores a SHA-256 fingerprint of a file under a key derived from its
//! canonical path, then later recomputes the fingerprint and reports whether
//! the file changed.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod output;
pub mod tracked;

pub use app::{run_app, CheckOutcome, Operation, RunConfig};
