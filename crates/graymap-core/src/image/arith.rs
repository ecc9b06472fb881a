//! Pointwise intensity transforms
//!
//! Full-buffer maps that rewrite gray levels without touching geometry.
//! All of them mutate the image in place, allocate nothing, and never
//! fail on a valid image.

use super::GrayImage;

impl GrayImage {
    /// Transform the image into its photographic negative.
    ///
    /// Each sample `v` becomes `maxval - v`, turning dark pixels light
    /// and vice-versa. Applying twice restores the original. Samples
    /// above maxval (storable but outside the logical range) saturate
    /// to 0.
    pub fn negate(&mut self) {
        let maxval = self.maxval;
        for v in self.samples.iter_mut() {
            *v = maxval.saturating_sub(*v);
        }
    }

    /// Apply a threshold.
    ///
    /// Samples below `thr` become black (0); all others become white
    /// (maxval).
    pub fn threshold(&mut self, thr: u8) {
        let maxval = self.maxval;
        for v in self.samples.iter_mut() {
            *v = if *v < thr { 0 } else { maxval };
        }
    }

    /// Brighten (or darken) by a multiplicative factor.
    ///
    /// Each sample becomes `round(v * factor)`, saturating at maxval.
    /// `factor > 1.0` brightens, `factor < 1.0` darkens, `1.0` is the
    /// identity. Rounding adds 0.5 and truncates.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is negative.
    pub fn brighten(&mut self, factor: f64) {
        assert!(factor >= 0.0, "brighten factor must be non-negative");
        let ceiling = f64::from(self.maxval);
        for v in self.samples.iter_mut() {
            let intensity = f64::from(*v) * factor;
            *v = if intensity > ceiling {
                self.maxval
            } else {
                (intensity + 0.5) as u8
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> GrayImage {
        GrayImage::from_raw(2, 2, 255, vec![10, 20, 30, 40]).unwrap()
    }

    #[test]
    fn test_negate() {
        let mut img = sample_image();
        img.negate();
        assert_eq!(img.samples(), &[245, 235, 225, 215]);
    }

    #[test]
    fn test_negate_involution() {
        let mut img = sample_image();
        let original = img.clone();
        img.negate();
        img.negate();
        assert!(img.equals(&original));
    }

    #[test]
    fn test_negate_small_maxval() {
        let mut img = GrayImage::from_raw(3, 1, 100, vec![0, 60, 100]).unwrap();
        img.negate();
        assert_eq!(img.samples(), &[100, 40, 0]);
    }

    #[test]
    fn test_threshold() {
        let mut img = sample_image();
        img.threshold(25);
        assert_eq!(img.samples(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_threshold_two_valued() {
        let mut img = GrayImage::from_raw(4, 1, 100, vec![0, 49, 50, 99]).unwrap();
        img.threshold(50);
        assert!(img.samples().iter().all(|&v| v == 0 || v == 100));
        assert_eq!(img.samples(), &[0, 0, 100, 100]);
    }

    #[test]
    fn test_brighten_identity_and_zero() {
        let mut img = sample_image();
        let original = img.clone();
        img.brighten(1.0);
        assert!(img.equals(&original));

        img.brighten(0.0);
        assert!(img.samples().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_brighten_rounds_and_saturates() {
        let mut img = GrayImage::from_raw(3, 1, 255, vec![10, 100, 200]).unwrap();
        img.brighten(1.5);
        // 15, 150, 300 -> saturated at 255
        assert_eq!(img.samples(), &[15, 150, 255]);

        let mut img = GrayImage::from_raw(2, 1, 255, vec![3, 5]).unwrap();
        img.brighten(0.5);
        // 1.5 -> 2, 2.5 -> 3
        assert_eq!(img.samples(), &[2, 3]);
    }

    #[test]
    fn test_brighten_saturates_at_maxval() {
        let mut img = GrayImage::from_raw(2, 1, 100, vec![60, 90]).unwrap();
        img.brighten(1.2);
        assert_eq!(img.samples(), &[72, 100]);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_brighten_negative_factor() {
        let mut img = sample_image();
        img.brighten(-0.5);
    }
}
