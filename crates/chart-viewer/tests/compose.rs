// File: crates/chart-viewer/tests/compose.rs
// Purpose: Frame fitting and letterboxing without opening a window.

use chart_viewer::{compose_argb, fit_within};
use image::{Rgba, RgbaImage};

#[test]
fn fit_keeps_aspect_ratio() {
    assert_eq!(fit_within((5400, 4200), (2700, 4200)), (2700, 2100));
    assert_eq!(fit_within((100, 50), (400, 400)), (400, 200));
    assert_eq!(fit_within((0, 0), (10, 10)), (10, 10));
}

#[test]
fn compose_letterboxes_on_white() {
    let frame = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
    let buf = compose_argb(&frame, 20, 10);
    assert_eq!(buf.len(), 200);
    // Left band is white, center is red.
    assert_eq!(buf[0], 0x00FF_FFFF);
    assert_eq!(buf[5 * 20 + 10], 0x00FF_0000);
}

#[test]
fn transparent_pixels_composite_to_white() {
    let frame = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    let buf = compose_argb(&frame, 4, 4);
    assert!(buf.iter().all(|&p| p == 0x00FF_FFFF));
}
