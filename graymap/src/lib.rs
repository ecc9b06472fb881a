//! graymap - In-memory 8-bit single-channel raster images
//!
//! A rectangular grid of gray-level samples with pixel access, pointwise
//! intensity transforms, geometric transforms, compositing, exact
//! subimage search, and a clamped-border mean filter.
//!
//! # Example
//!
//! ```
//! use graymap::{GrayImage, filter, transform};
//!
//! let mut img = GrayImage::new(64, 48, 255).unwrap();
//! img.set_pixel(10, 10, 200);
//! img.negate();
//! filter::blur(&mut img, 1, 1);
//! let rotated = transform::rotate_ccw(&img).unwrap();
//! assert_eq!(rotated.width(), 48);
//! assert_eq!(rotated.height(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use graymap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use graymap_filter as filter;
pub use graymap_io as io;
pub use graymap_transform as transform;
