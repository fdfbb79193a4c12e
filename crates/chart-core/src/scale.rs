// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-point transforms for the X and Y axes.

/// Data-space value.
pub type Value = f64;

/// Maps `[vmin, vmax]` onto `[px0, px1]`; `px1 < px0` is allowed (Y axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px0: f32,
    pub px1: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl LinearScale {
    pub fn new(px0: f32, px1: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px0, px1, vmin, vmax }
    }

    /// Horizontal scale over a plot rectangle.
    pub fn horizontal(left: f32, right: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(left, right, vmin, vmax)
    }

    /// Vertical scale over a plot rectangle; `vmin` sits at `bottom`.
    pub fn vertical(top: f32, bottom: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(bottom, top, vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.px0 + ((v - self.vmin) / span) as f32 * (self.px1 - self.px0)
    }
}
