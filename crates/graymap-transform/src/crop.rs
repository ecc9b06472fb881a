//! Rectangular cropping

use crate::TransformResult;
use graymap_core::GrayImage;

/// Extract the `w x h` rectangle whose top-left corner is (x, y).
///
/// The result keeps the source's maxval; the source is not modified.
///
/// # Panics
///
/// Panics if the rectangle does not lie completely inside the image.
pub fn crop(img: &GrayImage, x: u32, y: u32, w: u32, h: u32) -> TransformResult<GrayImage> {
    assert!(
        img.valid_rect(x, y, w, h),
        "crop rectangle ({x}, {y}, {w}, {h}) out of bounds"
    );
    let mut out = GrayImage::new(w, h, img.maxval())?;

    for i in 0..h {
        for j in 0..w {
            let val = img.get_pixel(x + j, y + i);
            out.set_pixel(j, i, val);
        }
    }

    Ok(out)
}
