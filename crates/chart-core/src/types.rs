// File: crates/chart-core/src/types.rs
// Summary: Shared units and constants (points, default figure size, paddings).

/// Layout unit: all figure geometry is expressed in points (1/72 inch).
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default raster resolution in dots per inch.
pub const DEFAULT_DPI: f32 = 100.0;

/// Default figure size in inches.
pub const FIG_WIDTH_IN: f32 = 6.4;
pub const FIG_HEIGHT_IN: f32 = 4.8;

/// Padding between figure edge and decorations, in units of the base font size.
pub const TIGHT_PAD_FRACTION: f32 = 1.08;

/// Gap between tick labels and the plot edge, in points.
pub const TICK_PAD: f32 = 3.5;
/// Tick mark length, in points.
pub const TICK_LENGTH: f32 = 3.5;
/// Gap between an axis label and its tick labels, in points.
pub const LABEL_PAD: f32 = 4.0;
/// Gap between a panel title and the top of the plot area, in points.
pub const TITLE_PAD: f32 = 6.0;

/// Margins around a rectangle, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            left: self.left.max(other.left),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }
}
