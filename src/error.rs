//! Error types for the Termite library.
//!
//! All errors are represented by the [`TermiteError`] enum. Document read
//! failures are recoverable (the batch indexer skips the document and
//! continues), while matrix write failures abort output generation.
//!
//! # Examples
//!
//! ```
//! use termite::error::{Result, TermiteError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TermiteError::analysis("invalid token stream"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Termite operations.
#[derive(Error, Debug)]
pub enum TermiteError {
    /// I/O errors not tied to a specific document or output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document could not be opened or read. Recoverable: the batch
    /// indexer logs the failure and skips the document.
    #[error("failed to read document '{path}': {source}")]
    Read {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A matrix destination could not be written. Fatal to the run.
    #[error("failed to write matrix '{path}': {source}")]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Analysis-related errors (tokenization, filtering, stemming).
    #[error("analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with [`TermiteError`].
pub type Result<T> = std::result::Result<T, TermiteError>;

impl TermiteError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermiteError::Analysis(msg.into())
    }

    /// Create a new document read error.
    pub fn read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        TermiteError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new matrix write error.
    pub fn write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        TermiteError::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is recoverable within a batch run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TermiteError::Read { .. })
    }
}
