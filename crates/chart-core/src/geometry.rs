// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for point and pixel math.

use skia_safe as skia;

/// Rectangle in points, y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Point at axes-fraction coordinates (0,0 bottom-left; 1,1 top-right).
    pub fn at_fraction(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.left + fx * self.width(), self.bottom - fy * self.height())
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Area of the overlap with `other` (0 when disjoint).
    pub fn overlap_area(&self, other: &RectF) -> f32 {
        let w = self.right.min(other.right) - self.left.max(other.left);
        let h = self.bottom.min(other.bottom) - self.top.max(other.top);
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Integer pixel rectangle, used for raster crops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, clamped to `[0, max_w] x [0, max_h]`.
    pub fn expand_clamped(&self, pad: i32, max_w: i32, max_h: i32) -> Self {
        Self {
            left: (self.left - pad).max(0),
            top: (self.top - pad).max(0),
            right: (self.right + pad).min(max_w),
            bottom: (self.bottom + pad).min(max_h),
        }
    }
}
