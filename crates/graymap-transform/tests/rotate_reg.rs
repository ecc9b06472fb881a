//! Geometric transform regression test
//!
//! Involution properties plus the fixed 2x2 scenario table.

use graymap_core::GrayImage;
use graymap_test::{RegParams, gradient_image, image_from_rows};
use graymap_transform::{crop, mirror, rotate_ccw};

#[test]
fn rotate_reg() {
    let mut rp = RegParams::new("rotate");

    let base = image_from_rows(255, &[&[10, 20], &[30, 40]]);

    // --- scenario table ---
    let rotated = rotate_ccw(&base).expect("rotate");
    rp.compare_images(&rotated, &image_from_rows(255, &[&[20, 40], &[10, 30]]));

    let mirrored = mirror(&base).expect("mirror");
    rp.compare_images(&mirrored, &image_from_rows(255, &[&[20, 10], &[40, 30]]));

    let cropped = crop(&base, 1, 0, 1, 1).expect("crop");
    rp.compare_images(&cropped, &image_from_rows(255, &[&[20]]));

    // --- four rotations reproduce the original ---
    let img = gradient_image(13, 7, 255);
    let mut r = img.clone();
    for _ in 0..4 {
        r = rotate_ccw(&r).expect("rotate");
    }
    rp.compare_images(&r, &img);

    // --- one rotation swaps dimensions ---
    let once = rotate_ccw(&img).expect("rotate");
    rp.compare_values(7.0, once.width() as f64, 0.0);
    rp.compare_values(13.0, once.height() as f64, 0.0);

    // --- mirror twice reproduces the original ---
    let m = mirror(&mirror(&img).expect("mirror")).expect("mirror");
    rp.compare_images(&m, &img);

    // --- crop keeps maxval and geometry ---
    let grad = gradient_image(9, 9, 100);
    let c = crop(&grad, 2, 3, 4, 5).expect("crop");
    rp.compare_values(100.0, c.maxval() as f64, 0.0);
    rp.compare_values(4.0, c.width() as f64, 0.0);
    rp.compare_values(5.0, c.height() as f64, 0.0);
    rp.compare_values(grad.get_pixel(2, 3) as f64, c.get_pixel(0, 0) as f64, 0.0);
    rp.compare_values(grad.get_pixel(5, 7) as f64, c.get_pixel(3, 4) as f64, 0.0);

    assert!(rp.cleanup(), "rotate regression test failed");
}

#[test]
fn crop_paste_reg() {
    let mut rp = RegParams::new("crop_paste");

    // cropping a rectangle and pasting it back restores the image
    let img = gradient_image(8, 6, 255);
    let region = crop(&img, 3, 1, 4, 4).expect("crop");
    let mut copy = img.clone();
    copy.paste(3, 1, &region);
    rp.compare_images(&copy, &img);

    // pasting a crop into a blank image places it at the offset
    let mut blank = GrayImage::new(8, 6, 255).unwrap();
    blank.paste(3, 1, &region);
    rp.compare_values(
        img.get_pixel(3, 1) as f64,
        blank.get_pixel(3, 1) as f64,
        0.0,
    );
    rp.compare_values(0.0, blank.get_pixel(0, 0) as f64, 0.0);

    assert!(rp.cleanup(), "crop/paste regression test failed");
}
