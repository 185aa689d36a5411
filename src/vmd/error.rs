//! Custom error types for the vmd-motion crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum VmdError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The leading magic bytes do not identify a VMD file.
    #[error("Not a VMD file: expected magic \"Vocaloid Motion Data 0002\", got {leading:02x?}")]
    InvalidMagic { leading: Vec<u8> },

    /// The buffer ended before the data it declares.
    ///
    /// Covers both a short header and a record count that overruns the
    /// remaining bytes.
    #[error("Truncated VMD data in {section}: need {needed} bytes, {remaining} remain")]
    Truncated {
        section: &'static str,
        needed: usize,
        remaining: usize,
    },
}

/// A convenience `Result` type alias using the crate's `VmdError` type.
pub type Result<T> = std::result::Result<T, VmdError>;
