//! Windowed mean (box) filter

use graymap_core::GrayImage;

/// Smooth an image with a (2dx+1) x (2dy+1) mean filter, in place.
///
/// Each pixel is replaced by the arithmetic mean, rounded to nearest, of
/// the samples in the window `[x-dx, x+dx] x [y-dy, y+dy]` that fall
/// inside the image. The window is clamped at the borders: near an edge
/// fewer samples contribute and the divisor is the in-bounds count, not
/// the nominal window area. `dx = dy = 0` leaves the image unchanged.
///
/// Every output value is computed from original samples only: the
/// filtered values are written into a shadow image first and copied back
/// once the whole pass is complete, so the window never reads a value
/// produced by the same pass.
pub fn blur(img: &mut GrayImage, dx: u32, dy: u32) {
    let w = img.width();
    let h = img.height();
    let maxval = img.maxval();
    let mut shadow = img.new_like();

    for y in 0..h {
        for x in 0..w {
            let x0 = x.saturating_sub(dx);
            let y0 = y.saturating_sub(dy);
            let x1 = (x as u64 + dx as u64).min(w as u64 - 1) as u32;
            let y1 = (y as u64 + dy as u64).min(h as u64 - 1) as u32;

            let mut sum: u64 = 0;
            for wy in y0..=y1 {
                for wx in x0..=x1 {
                    sum += u64::from(img.get_pixel(wx, wy));
                }
            }
            let count = u64::from(x1 - x0 + 1) * u64::from(y1 - y0 + 1);
            let mean = (sum as f64 / count as f64).round() as u8;
            shadow.set_pixel(x, y, mean.min(maxval));
        }
    }

    img.samples_mut().copy_from_slice(shadow.samples());
}
