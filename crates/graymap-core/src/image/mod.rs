//! GrayImage - the 8-bit single-channel image container
//!
//! # Sample layout
//!
//! Samples are stored in one contiguous buffer in raster-scan order:
//! left to right within a row, rows top to bottom. The sample at
//! coordinate (x, y) lives at linear index `y*width + x`, so index 0 is
//! the top-left corner. For a 100-pixel-wide image, (33, 0) is index 33
//! and (22, 1) is index 122.
//!
//! # maxval
//!
//! `maxval` is the gray level of pure white and the logical ceiling for
//! every sample. The storage type can hold values up to 255 regardless of
//! `maxval`; the pointwise and compositing operations are responsible for
//! saturating at `maxval`, the buffer is not.
//!
//! # Ownership
//!
//! A `GrayImage` uniquely owns its buffer. Constructors hand the value to
//! the caller, in-place operations borrow it mutably, and the buffer is
//! released when the value is dropped. There is no shared-ownership mode.

mod access;
mod arith;
mod blend;
mod compare;

use crate::error::{Error, Result};

/// Largest sample value the representation can store, and the largest
/// accepted `maxval`.
pub const PIX_MAX: u8 = 255;

/// 8-bit single-channel raster image.
///
/// # Examples
///
/// ```
/// use graymap_core::GrayImage;
///
/// let img = GrayImage::new(640, 480, 255).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.get_pixel(0, 0), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Gray level corresponding to pure white
    maxval: u8,
    /// Sample data (a raster scan)
    samples: Vec<u8>,
}

impl GrayImage {
    /// Create a new all-black image.
    ///
    /// The sample buffer is zero-initialized. Zero-area images (width or
    /// height 0) are permitted and own an empty buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMaxval`] if `maxval` is 0
    /// - [`Error::TooLarge`] if `width*height` overflows the addressable
    ///   size
    /// - [`Error::AllocationFailed`] if the buffer cannot be reserved; no
    ///   partial image is returned
    pub fn new(width: u32, height: u32, maxval: u8) -> Result<Self> {
        if maxval == 0 {
            return Err(Error::InvalidMaxval(0));
        }
        let len = checked_area(width, height)?;

        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed)?;
        samples.resize(len, 0);

        Ok(GrayImage {
            width,
            height,
            maxval,
            samples,
        })
    }

    /// Create an image that adopts an existing sample buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMaxval`] if `maxval` is 0
    /// - [`Error::TooLarge`] if `width*height` overflows the addressable
    ///   size
    /// - [`Error::BadBufferLength`] if `samples.len() != width*height`
    pub fn from_raw(width: u32, height: u32, maxval: u8, samples: Vec<u8>) -> Result<Self> {
        if maxval == 0 {
            return Err(Error::InvalidMaxval(0));
        }
        let len = checked_area(width, height)?;
        if samples.len() != len {
            return Err(Error::BadBufferLength {
                width,
                height,
                got: samples.len(),
            });
        }

        Ok(GrayImage {
            width,
            height,
            maxval,
            samples,
        })
    }

    /// Create a zero-filled image with the same geometry and maxval as
    /// `self`. Used for shadow buffers and scaffolding.
    pub fn new_like(&self) -> Self {
        GrayImage {
            width: self.width,
            height: self.height,
            maxval: self.maxval,
            samples: vec![0; self.samples.len()],
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the gray level corresponding to pure white.
    #[inline]
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Get raw access to the sample buffer.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Get mutable raw access to the sample buffer.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Minimum and maximum gray level in the image.
    ///
    /// Returns `None` for a zero-area image.
    pub fn stats(&self) -> Option<(u8, u8)> {
        let mut iter = self.samples.iter().copied();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for v in iter {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        Some((min, max))
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &GrayImage) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Exact comparison: dimensions, maxval, and every sample.
    pub fn equals(&self, other: &GrayImage) -> bool {
        self.sizes_equal(other) && self.maxval == other.maxval && self.samples == other.samples
    }
}

fn checked_area(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::TooLarge { width, height })
}
