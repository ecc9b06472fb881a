//! graymap-test - Regression test support
//!
//! A small pass/fail recorder plus deterministic image builders, shared
//! by the `tests/*_reg.rs` integration tests of every workspace crate.
//!
//! # Usage
//!
//! ```
//! use graymap_test::{RegParams, constant_image};
//!
//! let mut rp = RegParams::new("example");
//! let img = constant_image(4, 4, 255, 7);
//! rp.compare_values(7.0, img.get_pixel(0, 0) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

use graymap_core::GrayImage;

/// Regression test parameters
///
/// Tracks the test name, a running index, and every recorded failure.
/// Each `compare_*` call increments the index so a failure message pins
/// down which step went wrong.
pub struct RegParams {
    /// Name of the test (e.g. "rotate")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////   {test_name}_reg   ////////////////");
        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Compare two values within a tolerance.
    ///
    /// Records a failure (and returns false) when
    /// `|expected - actual| > delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if (expected - actual).abs() > delta {
            let msg = format!(
                "Failure in {}_reg, index {}: expected {}, got {}",
                self.test_name, self.index, expected, actual
            );
            eprintln!("{msg}");
            self.failures.push(msg);
            self.success = false;
            return false;
        }
        true
    }

    /// Compare a boolean outcome.
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.compare_values(
            if expected { 1.0 } else { 0.0 },
            if actual { 1.0 } else { 0.0 },
            0.0,
        )
    }

    /// Compare two images exactly: dimensions, maxval, and every sample.
    pub fn compare_images(&mut self, img1: &GrayImage, img2: &GrayImage) -> bool {
        self.index += 1;
        if !img1.sizes_equal(img2) || img1.maxval() != img2.maxval() {
            let msg = format!(
                "Failure in {}_reg, index {}: geometry mismatch {}x{} (maxval {}) vs {}x{} (maxval {})",
                self.test_name,
                self.index,
                img1.width(),
                img1.height(),
                img1.maxval(),
                img2.width(),
                img2.height(),
                img2.maxval()
            );
            eprintln!("{msg}");
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for y in 0..img1.height() {
            for x in 0..img1.width() {
                let p1 = img1.get_pixel(x, y);
                let p2 = img2.get_pixel(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg, index {}: sample mismatch at ({}, {}): {} vs {}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    eprintln!("{msg}");
                    self.failures.push(msg);
                    self.success = false;
                    return false;
                }
            }
        }
        true
    }

    /// Print a summary and return the overall success status.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}

/// Build an image from explicit sample rows.
///
/// All rows must have the same length.
///
/// # Panics
///
/// Panics on ragged rows or an invalid maxval.
pub fn image_from_rows(maxval: u8, rows: &[&[u8]]) -> GrayImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len() as u32);
    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        assert_eq!(row.len() as u32, width, "ragged sample rows");
        samples.extend_from_slice(row);
    }
    GrayImage::from_raw(width, height, maxval, samples).expect("valid test image")
}

/// Build an image with every sample set to `value`.
pub fn constant_image(width: u32, height: u32, maxval: u8, value: u8) -> GrayImage {
    let samples = vec![value; (width as usize) * (height as usize)];
    GrayImage::from_raw(width, height, maxval, samples).expect("valid test image")
}

/// Build a deterministic non-uniform image: sample (x, y) is
/// `(3*x + 7*y) % (maxval + 1)`.
pub fn gradient_image(width: u32, height: u32, maxval: u8) -> GrayImage {
    let modulus = maxval as u32 + 1;
    let mut samples = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            samples.push(((3 * x + 7 * y) % modulus) as u8);
        }
    }
    GrayImage::from_raw(width, height, maxval, samples).expect("valid test image")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let img = image_from_rows(255, &[&[1, 2], &[3, 4]]);
        assert_eq!(img.samples(), &[1, 2, 3, 4]);

        let flat = constant_image(3, 2, 100, 42);
        assert_eq!(flat.stats(), Some((42, 42)));

        let grad = gradient_image(5, 5, 255);
        assert_eq!(grad.get_pixel(0, 0), 0);
        assert_eq!(grad.get_pixel(2, 1), 13);
    }

    #[test]
    fn test_reg_params_records_failures() {
        let mut rp = RegParams::new("selftest");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert!(rp.compare_bool(true, true));
        assert!(!rp.cleanup());
    }
}
