// File: crates/chart-core/src/series.rs
// Summary: Series model for lines, bars and horizontal reference lines.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    /// (center x, height) bars rising from the baseline (default 0.0).
    Bar,
    /// Horizontal line spanning the full x range at `baseline`.
    HLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    /// Dash intervals in units of line width.
    pub fn dash_pattern(self) -> Option<[f32; 2]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some([3.7, 1.6]),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: Option<String>,
    pub color: skia::Color,
    pub alpha: f32,
    pub data_xy: Vec<(f64, f64)>,
    pub baseline: Option<f64>,
    /// Stroke width in points; `None` uses the theme default.
    pub line_width: Option<f32>,
    pub line_style: LineStyle,
    pub marker: Marker,
    /// Marker diameter in points.
    pub marker_size: f32,
    /// Bar width in data units.
    pub bar_width: f64,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self::with_data(series_type, Vec::new())
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            label: None,
            color: skia::Color::from_rgb(0x1f, 0x77, 0xb4),
            alpha: 1.0,
            data_xy: data,
            baseline: None,
            line_width: None,
            line_style: LineStyle::Solid,
            marker: Marker::None,
            marker_size: 6.0,
            bar_width: 0.8,
        }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Line, data)
    }

    pub fn bars(data: Vec<(f64, f64)>, width: f64) -> Self {
        Self { bar_width: width, ..Self::with_data(SeriesType::Bar, data) }
    }

    pub fn hline(y: f64) -> Self {
        Self::new(SeriesType::HLine).with_baseline(y)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width.max(0.0));
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    /// Color with the series alpha applied.
    pub fn paint_color(&self) -> skia::Color {
        let a = (f32::from(self.color.a()) * self.alpha).round() as u8;
        self.color.with_a(a)
    }

    /// Data extents as (x_min, x_max, y_min, y_max); `None` when the series
    /// constrains neither axis. Reference lines only report their y value.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        match self.series_type {
            SeriesType::Line => {
                for &(x, y) in &self.data_xy {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
            SeriesType::Bar => {
                let half = self.bar_width * 0.5;
                let base = self.baseline_value();
                for &(x, h) in &self.data_xy {
                    x_min = x_min.min(x - half);
                    x_max = x_max.max(x + half);
                    y_min = y_min.min(base.min(h));
                    y_max = y_max.max(base.max(h));
                }
            }
            SeriesType::HLine => {
                let y = self.baseline_value();
                y_min = y;
                y_max = y;
            }
        }
        if !y_min.is_finite() {
            return None;
        }
        Some((x_min, x_max, y_min, y_max))
    }
}
