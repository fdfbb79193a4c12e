// File: crates/chart-core/src/legend.rs
// Summary: Legend entries, measurement, placement and drawing.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::series::{LineStyle, Marker, Series, SeriesType};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;

// Spacing in units of the legend font size.
const BORDER_PAD: f32 = 0.4;
const HANDLE_LENGTH: f32 = 2.0;
const HANDLE_TEXT_PAD: f32 = 0.8;
const LABEL_SPACING: f32 = 0.5;
const BORDER_AXES_PAD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLocation {
    /// Corner overlapping the least plotted data.
    Best,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Visual key drawn next to a legend label.
#[derive(Clone, Debug, PartialEq)]
pub enum Swatch {
    Line { color: skia::Color, width: f32, style: LineStyle, marker: Marker, marker_size: f32 },
    Patch { color: skia::Color },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

impl LegendEntry {
    /// Handle for a labeled series; unlabeled series have none.
    pub fn from_series(series: &Series, theme: &Theme) -> Option<Self> {
        let label = series.label.clone()?;
        let swatch = match series.series_type {
            SeriesType::Bar => Swatch::Patch { color: series.paint_color() },
            SeriesType::Line | SeriesType::HLine => Swatch::Line {
                color: series.paint_color(),
                width: series.line_width.unwrap_or(theme.line_width),
                style: series.line_style,
                marker: series.marker,
                marker_size: series.marker_size,
            },
        };
        Some(Self { label, swatch })
    }
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub location: LegendLocation,
    /// Font size in points; `None` uses the theme legend size.
    pub font_size: Option<f32>,
    /// Explicit handles; `None` collects them from the panel's series.
    pub entries: Option<Vec<LegendEntry>>,
}

impl Legend {
    pub fn new(location: LegendLocation) -> Self {
        Self { location, font_size: None, entries: None }
    }

    pub fn with_entries(location: LegendLocation, entries: Vec<LegendEntry>) -> Self {
        Self { location, font_size: None, entries: Some(entries) }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// Outer size (width, height) of a legend box in points.
pub fn measure(entries: &[LegendEntry], spec: &TextSpec, shaper: &TextShaper) -> (f32, f32) {
    if entries.is_empty() {
        return (0.0, 0.0);
    }
    let fs = spec.size;
    let mut label_w: f32 = 0.0;
    let mut rows_h = 0.0;
    for e in entries {
        let (w, h) = shaper.measure(&e.label, spec);
        label_w = label_w.max(w);
        rows_h += h.max(fs);
    }
    rows_h += LABEL_SPACING * fs * (entries.len() as f32 - 1.0);
    let width = 2.0 * BORDER_PAD * fs + HANDLE_LENGTH * fs + HANDLE_TEXT_PAD * fs + label_w;
    let height = 2.0 * BORDER_PAD * fs + rows_h;
    (width, height)
}

/// Rectangle for the legend inside `plot`. `obstacles` are plotted shapes in points;
/// `Best` picks the first corner with the least overlap, scanning UR, UL, LL, LR.
pub fn place(location: LegendLocation, plot: RectF, size: (f32, f32), font_size: f32, obstacles: &[RectF]) -> RectF {
    let pad = BORDER_AXES_PAD * font_size;
    let (w, h) = size;
    let corner = |loc: LegendLocation| match loc {
        LegendLocation::UpperLeft => RectF::from_ltwh(plot.left + pad, plot.top + pad, w, h),
        LegendLocation::LowerLeft => RectF::from_ltwh(plot.left + pad, plot.bottom - pad - h, w, h),
        LegendLocation::LowerRight => RectF::from_ltwh(plot.right - pad - w, plot.bottom - pad - h, w, h),
        LegendLocation::UpperRight | LegendLocation::Best => {
            RectF::from_ltwh(plot.right - pad - w, plot.top + pad, w, h)
        }
    };
    if location != LegendLocation::Best {
        return corner(location);
    }
    let candidates = [
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
    ];
    let mut best = corner(LegendLocation::UpperRight);
    let mut best_cost = f32::INFINITY;
    for loc in candidates {
        let r = corner(loc);
        let cost: f32 = obstacles.iter().map(|o| {
            let area = r.overlap_area(o);
            // Degenerate obstacles (points, thin lines) still count when inside.
            if area > 0.0 { area } else if r.contains(o.center_x(), o.center_y()) { 1.0 } else { 0.0 }
        }).sum();
        if cost < best_cost {
            best_cost = cost;
            best = r;
        }
    }
    best
}

/// Draw a legend box at `rect`.
pub fn draw(
    canvas: &skia::Canvas,
    entries: &[LegendEntry],
    rect: RectF,
    spec: &TextSpec,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let fs = spec.size;
    let radius = 0.2 * fs;
    let rrect = skia::RRect::new_rect_xy(rect.to_skia(), radius, radius);

    let mut face = skia::Paint::default();
    face.set_anti_alias(true);
    face.set_color(theme.legend_face);
    face.set_alpha_f(theme.legend_alpha);
    canvas.draw_rrect(rrect, &face);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(0.8);
    edge.set_color(theme.legend_edge);
    edge.set_alpha_f(theme.legend_alpha);
    canvas.draw_rrect(rrect, &edge);

    let mut y = rect.top + BORDER_PAD * fs;
    let handle_left = rect.left + BORDER_PAD * fs;
    let handle_right = handle_left + HANDLE_LENGTH * fs;
    let text_left = handle_right + HANDLE_TEXT_PAD * fs;
    for e in entries {
        let (_, h) = shaper.measure(&e.label, spec);
        let row_h = h.max(fs);
        let cy = y + row_h * 0.5;
        draw_swatch(canvas, &e.swatch, handle_left, handle_right, cy, fs);
        shaper.draw(canvas, &e.label, spec, (text_left, cy), HAlign::Left, VAlign::Center);
        y += row_h + LABEL_SPACING * fs;
    }
}

fn draw_swatch(canvas: &skia::Canvas, swatch: &Swatch, left: f32, right: f32, cy: f32, fs: f32) {
    match swatch {
        Swatch::Patch { color } => {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(*color);
            let half_h = 0.35 * fs;
            canvas.draw_rect(skia::Rect::from_ltrb(left, cy - half_h, right, cy + half_h), &fill);
        }
        Swatch::Line { color, width, style, marker, marker_size } => {
            let mut stroke = crate::chart::stroke_paint(*color, *width, *style);
            stroke.set_stroke_cap(skia::paint::Cap::Butt);
            canvas.draw_line((left, cy), (right, cy), &stroke);
            crate::chart::draw_marker(canvas, *marker, ((left + right) * 0.5, cy), *marker_size, *color);
        }
    }
}
