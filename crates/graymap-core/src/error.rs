//! Error types for graymap-core
//!
//! Construction and adoption of sample buffers are the only fallible
//! operations in this crate; everything else is total over validated
//! inputs, and contract violations (bad coordinates, invalid rectangles)
//! panic instead of returning an error.

use thiserror::Error;

/// graymap error type
#[derive(Error, Debug)]
pub enum Error {
    /// maxval outside 1..=255
    #[error("invalid maxval: {0} (must be in 1..=255)")]
    InvalidMaxval(u32),

    /// Sample buffer length does not match the image geometry
    #[error("sample buffer length {got} does not match {width}x{height}")]
    BadBufferLength {
        width: u32,
        height: u32,
        got: usize,
    },

    /// Dimension product overflows the addressable size
    #[error("image too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    /// Sample buffer allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for graymap operations
pub type Result<T> = std::result::Result<T, Error>;
