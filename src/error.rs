//! The error type shared by the fallible utilities in this crate.
//!
//! The tree and quaternion types are total and never produce one of these.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Change was requested for an amount below zero.
    #[error("amount cannot be negative: {0}")]
    NegativeAmount(i64),

    /// A file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
        /// The file we were trying to read.
        path: PathBuf,
        /// What the OS told us.
        #[source]
        source: io::Error,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
