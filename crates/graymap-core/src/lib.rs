//! graymap Core - In-memory 8-bit single-channel raster images
//!
//! This crate provides the fundamental data structure of the graymap
//! library and every operation that reads or rewrites its sample buffer
//! in place:
//!
//! - [`GrayImage`] - the image container (geometry, maxval, samples)
//! - validity checking and bounds-checked pixel access
//! - pointwise intensity transforms (negate, threshold, brighten)
//! - compositing (paste, alpha-blend)
//! - exact subimage matching and brute-force location
//! - pixel statistics
//! - [`instr`] - process-wide operation counters
//!
//! Geometric transforms live in `graymap-transform`, the mean filter in
//! `graymap-filter`, and PGM file I/O in `graymap-io`.

pub mod error;
pub mod image;
pub mod instr;

pub use error::{Error, Result};
pub use image::{GrayImage, PIX_MAX};
