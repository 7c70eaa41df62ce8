//! Error handling for the linebar library.
//!
//! Rendering only ever fails when the output stream refuses a write, and
//! sizing inputs fails when a file's metadata cannot be read. Both cases are
//! captured by [`Error`].

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can happen when using linebar.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// This variant wraps failures of the output stream the bar renders into.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The size of an input file could not be determined.
    #[error("Cannot read metadata of {path:?}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a linebar error.
pub type Result<T> = std::result::Result<T, Error>;
