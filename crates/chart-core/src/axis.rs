// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, limits and tick modes.

use skia_safe as skia;

use crate::grid::{format_tick, nice_ticks};

/// Upper bound on the number of bins produced by automatic tick placement.
const AUTO_TICK_BINS: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub enum TickMode {
    /// Nice-number ticks across the current limits.
    Auto,
    /// One tick per category at positions `0, 1, .., n-1`.
    Categories(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickMode,
    /// Overrides the theme's label color.
    pub label_color: Option<skia::Color>,
    /// Limits were set explicitly and survive autoscaling.
    pub fixed: bool,
}

impl Axis {
    /// Axis with explicit limits.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: TickMode::Auto,
            label_color: None,
            fixed: true,
        }
    }

    /// Axis whose limits follow the data.
    pub fn auto(label: impl Into<String>) -> Self {
        Self { fixed: false, ..Self::new(label, 0.0, 1.0) }
    }

    pub fn default_x() -> Self { Self::auto("") }

    pub fn default_y() -> Self { Self::auto("") }

    pub fn set_limits(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        self.fixed = true;
    }

    pub fn set_categories<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.ticks = TickMode::Categories(labels.into_iter().map(Into::into).collect());
    }

    /// Expand data extents by `margin` (fraction of span) unless limits are fixed.
    pub fn fit(&mut self, data_min: f64, data_max: f64, margin: f64) {
        if self.fixed || !data_min.is_finite() || !data_max.is_finite() {
            return;
        }
        let mut lo = data_min;
        let mut hi = data_max;
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let pad = (hi - lo) * margin;
        self.min = lo - pad;
        self.max = hi + pad;
    }

    /// Tick positions paired with their label text.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        match &self.ticks {
            TickMode::Auto => {
                let (ticks, step) = nice_ticks(self.min, self.max, AUTO_TICK_BINS);
                ticks.into_iter().map(|v| (v, format_tick(v, step))).collect()
            }
            TickMode::Categories(labels) => labels
                .iter()
                .enumerate()
                .map(|(i, l)| (i as f64, l.clone()))
                .filter(|(v, _)| *v >= self.min.min(self.max) && *v <= self.max.max(self.min))
                .collect(),
        }
    }
}
