//! Compositing operations
//!
//! Paste and alpha-blend write a source image into a rectangular region
//! of a destination image. The destination is mutated in place; the
//! source is never modified. The region must fit entirely inside the
//! destination.

use super::GrayImage;

impl GrayImage {
    /// Paste `src` into this image with its top-left corner at (x, y).
    ///
    /// Every sample of `src` overwrites the corresponding destination
    /// sample.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not fit inside this image at (x, y).
    pub fn paste(&mut self, x: u32, y: u32, src: &GrayImage) {
        assert!(
            self.valid_rect(x, y, src.width(), src.height()),
            "paste rectangle ({x}, {y}, {}, {}) out of bounds",
            src.width(),
            src.height()
        );
        for i in 0..src.height() {
            for j in 0..src.width() {
                let v = src.get_pixel(j, i);
                self.set_pixel(x + j, y + i, v);
            }
        }
    }

    /// Blend `src` into this image with its top-left corner at (x, y).
    ///
    /// Each destination sample becomes
    /// `round(alpha*src + (1-alpha)*dst)`, where rounding adds 0.5 before
    /// truncation, saturated into `[0, maxval]` before the write.
    /// `alpha = 0.0` leaves the destination unchanged and `alpha = 1.0`
    /// reproduces [`paste`](GrayImage::paste). Values outside [0, 1] are
    /// permitted; the overshoot saturates, which can produce interesting
    /// effects.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not fit inside this image at (x, y).
    pub fn blend(&mut self, x: u32, y: u32, src: &GrayImage, alpha: f64) {
        assert!(
            self.valid_rect(x, y, src.width(), src.height()),
            "blend rectangle ({x}, {y}, {}, {}) out of bounds",
            src.width(),
            src.height()
        );
        let ceiling = f64::from(self.maxval);
        for i in 0..src.height() {
            for j in 0..src.width() {
                let s = f64::from(src.get_pixel(j, i));
                let d = f64::from(self.get_pixel(x + j, y + i));
                let mixed = (alpha * s + (1.0 - alpha) * d + 0.5).clamp(0.0, ceiling);
                self.set_pixel(x + j, y + i, mixed as u8);
            }
        }
    }
}
