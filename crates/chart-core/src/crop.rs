// File: crates/chart-core/src/crop.rs
// Summary: Tight bounding-box crop of a rendered frame.

use image::RgbaImage;

use crate::geometry::RectI32;

/// Smallest rectangle holding every pixel that differs from `background`.
pub fn content_bounds(img: &RgbaImage, background: [u8; 4]) -> Option<RectI32> {
    let w = img.width() as usize;
    if w == 0 || img.height() == 0 {
        return None;
    }
    let row_len = w * 4;
    let mut left = w;
    let mut right = 0usize;
    let mut top = None;
    let mut bottom = 0usize;
    for (y, row) in img.as_raw().chunks_exact(row_len).enumerate() {
        let mut first = None;
        let mut last = 0usize;
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px != background {
                first.get_or_insert(x);
                last = x;
            }
        }
        if let Some(f) = first {
            top.get_or_insert(y);
            bottom = y;
            left = left.min(f);
            right = right.max(last);
        }
    }
    let top = top?;
    Some(RectI32::from_ltrb(left as i32, top as i32, right as i32 + 1, bottom as i32 + 1))
}

/// Crop to content plus `pad` pixels. Blank frames are returned unchanged.
pub fn crop_to_content(img: RgbaImage, background: [u8; 4], pad: i32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let Some(bounds) = content_bounds(&img, background) else {
        return img;
    };
    let r = bounds.expand_clamped(pad.max(0), w as i32, h as i32);
    if r.left == 0 && r.top == 0 && r.width() == w as i32 && r.height() == h as i32 {
        return img;
    }
    image::imageops::crop_imm(&img, r.left as u32, r.top as u32, r.width() as u32, r.height() as u32).to_image()
}
