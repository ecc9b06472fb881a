//! Subimage matching and location
//!
//! Exact equality of a pattern against a region of a larger image, and
//! the brute-force scan over all placement offsets. Each in-bounds sample
//! comparison is recorded in the [`instr`](crate::instr) counters, which
//! makes the O(W*H*w*h) cost of the scan observable.

use super::GrayImage;
use crate::instr;

impl GrayImage {
    /// Test whether `pattern`, placed with its top-left corner at (x, y),
    /// matches this image sample-for-sample.
    ///
    /// Overlay positions that fall outside this image are skipped rather
    /// than treated as a mismatch, so a pattern partially hanging off the
    /// right or bottom edge can still match. The pattern is not required
    /// to fit inside the image.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position in this image.
    pub fn matches_subimage(&self, x: u32, y: u32, pattern: &GrayImage) -> bool {
        assert!(
            self.valid_pos(x, y),
            "pattern anchor ({x}, {y}) out of bounds"
        );
        for i in 0..pattern.height() {
            for j in 0..pattern.width() {
                let px = x as u64 + j as u64;
                let py = y as u64 + i as u64;
                if px >= self.width() as u64 || py >= self.height() as u64 {
                    continue;
                }
                instr::count_comparisons(1);
                if self.get_pixel(px as u32, py as u32) != pattern.get_pixel(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Search for `pattern` inside this image.
    ///
    /// Scans every candidate top-left offset in raster order (left to
    /// right within a row, rows top to bottom) and returns the first
    /// offset at which [`matches_subimage`](GrayImage::matches_subimage)
    /// succeeds, or `None` when the full scan finds nothing. Ties are
    /// therefore broken by scan order, not by match quality.
    pub fn locate_subimage(&self, pattern: &GrayImage) -> Option<(u32, u32)> {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.matches_subimage(x, y, pattern) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
