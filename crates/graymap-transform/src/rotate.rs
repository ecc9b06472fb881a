//! Rotation and flip operations
//!
//! Both transforms allocate a fresh image and remap indices; the source
//! is never modified and keeps its maxval in the result.

use crate::TransformResult;
use graymap_core::GrayImage;

/// Rotate an image 90 degrees counter-clockwise.
///
/// The output dimensions are swapped: the result is `height x width`.
/// The source sample at (x, y) lands at (y, width-1-x) in the result, so
/// four applications reproduce the original image exactly.
pub fn rotate_ccw(img: &GrayImage) -> TransformResult<GrayImage> {
    let w = img.width();
    let h = img.height();
    let mut out = GrayImage::new(h, w, img.maxval())?;

    for y in 0..h {
        for x in 0..w {
            let val = img.get_pixel(x, y);
            out.set_pixel(y, w - 1 - x, val);
        }
    }

    Ok(out)
}

/// Mirror an image horizontally (flip left-right).
///
/// Same dimensions; the source sample at (x, y) lands at (width-1-x, y).
/// Applying twice is the identity.
pub fn mirror(img: &GrayImage) -> TransformResult<GrayImage> {
    let w = img.width();
    let h = img.height();
    let mut out = GrayImage::new(w, h, img.maxval())?;

    for y in 0..h {
        for x in 0..w {
            let val = img.get_pixel(x, y);
            out.set_pixel(w - 1 - x, y, val);
        }
    }

    Ok(out)
}
