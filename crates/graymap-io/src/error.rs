//! I/O error types
//!
//! One error type for the whole crate. `Io` wraps the operating-system
//! failure (keeping its error code reachable through `source()`);
//! `InvalidData` carries a human-readable cause for malformed files.

use thiserror::Error;

/// Error type for image file I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] graymap_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
