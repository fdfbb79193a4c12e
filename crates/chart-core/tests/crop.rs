// File: crates/chart-core/tests/crop.rs
// Purpose: Tight bounding-box detection and cropping.

use chart_core::crop::{content_bounds, crop_to_content};
use chart_core::geometry::RectI32;
use chart_core::RgbaImage;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn canvas_with_block() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(50, 40, image::Rgba(WHITE));
    for y in 10..20 {
        for x in 5..15 {
            img.put_pixel(x, y, image::Rgba([0, 0, 0, 255]));
        }
    }
    img
}

#[test]
fn bounds_cover_drawn_pixels() {
    let b = content_bounds(&canvas_with_block(), WHITE).expect("content");
    assert_eq!(b, RectI32::from_ltrb(5, 10, 15, 20));
}

#[test]
fn crop_adds_padding_and_clamps() {
    let out = crop_to_content(canvas_with_block(), WHITE, 3);
    assert_eq!(out.dimensions(), (16, 16));
    let out = crop_to_content(canvas_with_block(), WHITE, 100);
    assert_eq!(out.dimensions(), (50, 40));
}

#[test]
fn blank_frame_is_untouched() {
    let blank = RgbaImage::from_pixel(8, 8, image::Rgba(WHITE));
    assert!(content_bounds(&blank, WHITE).is_none());
    assert_eq!(crop_to_content(blank, WHITE, 2).dimensions(), (8, 8));
}

#[test]
fn empty_frame_has_no_bounds() {
    let empty = RgbaImage::new(0, 5);
    assert!(content_bounds(&empty, WHITE).is_none());
    assert_eq!(crop_to_content(empty, WHITE, 2).dimensions(), (0, 5));
    assert_eq!(crop_to_content(RgbaImage::new(4, 0), WHITE, 2).dimensions(), (4, 0));
}
