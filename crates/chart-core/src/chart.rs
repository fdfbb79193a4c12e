// File: crates/chart-core/src/chart.rs
// Summary: A single chart panel (axes): series, optional twin y-axis, legend, annotations,
//          decoration measurement for layout, and Skia drawing.

use skia_safe as skia;

use crate::annotation::Annotation;
use crate::axis::Axis;
use crate::geometry::RectF;
use crate::legend::{self, Legend, LegendEntry, LegendLocation};
use crate::scale::LinearScale;
use crate::series::{LineStyle, Marker, Series, SeriesType};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{Insets, LABEL_PAD, TICK_LENGTH, TICK_PAD, TITLE_PAD};

/// Fraction of the data span added on each side of auto-scaled axes.
pub const AUTO_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct Title {
    pub text: String,
    pub size: Option<f32>,
    pub bold: bool,
}

/// Secondary y-axis sharing the panel's x-axis, drawn on the right.
#[derive(Clone, Debug)]
pub struct TwinAxis {
    pub y_axis: Axis,
    pub series: Vec<Series>,
}

impl TwinAxis {
    fn new() -> Self {
        Self { y_axis: Axis::default_y(), series: Vec::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>, color: Option<skia::Color>) {
        self.y_axis.label = label.into();
        self.y_axis.label_color = color;
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.y_axis.set_limits(min, max);
    }

    /// Legend handles for this axis, in insertion order.
    pub fn legend_entries(&self, theme: &Theme) -> Vec<LegendEntry> {
        self.series.iter().filter_map(|s| LegendEntry::from_series(s, theme)).collect()
    }
}

#[derive(Clone, Copy, Debug)]
struct GridOverride {
    on: bool,
    alpha: f32,
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<Title>,
    pub twin: Option<TwinAxis>,
    pub legend: Option<Legend>,
    pub annotations: Vec<Annotation>,
    /// When false only annotations are drawn (no background, grid, ticks or labels).
    pub axis_visible: bool,
    grid: Option<GridOverride>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
            twin: None,
            legend: None,
            annotations: Vec::new(),
            axis_visible: true,
            grid: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_title(&mut self, text: impl Into<String>, size: f32, bold: bool) {
        self.title = Some(Title { text: text.into(), size: Some(size), bold });
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.x_axis.label = label.into();
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.y_axis.label = label.into();
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.x_axis.set_limits(min, max);
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.y_axis.set_limits(min, max);
    }

    /// Category labels at x = 0, 1, .., n-1.
    pub fn set_xticklabels<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.x_axis.set_categories(labels);
    }

    pub fn set_grid(&mut self, on: bool, alpha: f32) {
        self.grid = Some(GridOverride { on, alpha: alpha.clamp(0.0, 1.0) });
    }

    /// Hide axes decorations; annotations still render.
    pub fn axis_off(&mut self) {
        self.axis_visible = false;
    }

    pub fn text(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Secondary y-axis, created on first use.
    pub fn twinx(&mut self) -> &mut TwinAxis {
        self.twin.get_or_insert_with(TwinAxis::new)
    }

    /// Legend from this panel's own labeled series.
    pub fn legend(&mut self, location: LegendLocation) {
        self.legend = Some(Legend::new(location));
    }

    /// Replace the legend, e.g. with handles merged from primary and twin axes.
    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Legend handles for the primary axis, in insertion order.
    pub fn legend_entries(&self, theme: &Theme) -> Vec<LegendEntry> {
        self.series.iter().filter_map(|s| LegendEntry::from_series(s, theme)).collect()
    }

    /// Fit non-fixed axes to the data, padding by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let (x_min, x_max, y_min, y_max) = data_extent(&self.series);
        let mut x_lo = x_min;
        let mut x_hi = x_max;
        if let Some(twin) = &mut self.twin {
            let (tx_min, tx_max, ty_min, ty_max) = data_extent(&twin.series);
            x_lo = x_lo.min(tx_min);
            x_hi = x_hi.max(tx_max);
            twin.y_axis.fit(ty_min, ty_max, margin);
        }
        self.x_axis.fit(x_lo, x_hi, margin);
        self.y_axis.fit(y_min, y_max, margin);
    }

    fn grid_style(&self, theme: &Theme) -> Option<f32> {
        match self.grid {
            Some(g) if g.on => Some(g.alpha),
            Some(_) => None,
            None if theme.grid_on => Some(1.0),
            None => None,
        }
    }

    fn title_spec(&self, theme: &Theme) -> Option<(&str, TextSpec)> {
        let t = self.title.as_ref()?;
        let mut spec = TextSpec::new(t.size.unwrap_or(theme.title_size), theme.text);
        if t.bold {
            spec = spec.bold();
        }
        Some((t.text.as_str(), spec))
    }

    fn annotation_default_size(theme: &Theme) -> f32 { theme.font_size }

    /// Space needed around the plot rectangle for titles, ticks and labels.
    /// With `plot` given, annotations outside the plot area are included too.
    pub fn decorations(&self, theme: &Theme, shaper: &TextShaper, plot: Option<RectF>) -> Insets {
        let mut ins = Insets::default();
        if self.axis_visible {
            let tick_spec = TextSpec::new(theme.tick_size, theme.tick_label);
            let label_spec = TextSpec::new(theme.label_size, theme.axis_label);
            let tick_len = if theme.tick_mark.is_some() { TICK_LENGTH } else { 0.0 };

            ins.left = side_extent(&self.y_axis, &tick_spec, &label_spec, tick_len, shaper, true);
            if let Some(twin) = &self.twin {
                ins.right = side_extent(&twin.y_axis, &tick_spec, &label_spec, tick_len, shaper, true);
            }
            ins.bottom = side_extent(&self.x_axis, &tick_spec, &label_spec, tick_len, shaper, false);
            if let Some((text, spec)) = self.title_spec(theme) {
                ins.top = shaper.measure(text, &spec).1 + TITLE_PAD;
            }
        }
        if let Some(plot) = plot {
            for a in &self.annotations {
                let spec = a.spec(Self::annotation_default_size(theme), theme.text);
                let b = a.bounds(plot, &spec, shaper);
                ins = ins.max(Insets::new(
                    plot.left - b.left,
                    b.right - plot.right,
                    plot.top - b.top,
                    b.bottom - plot.bottom,
                ));
            }
        }
        ins
    }

    /// Draw the panel with its plot area at `plot` (points).
    pub fn draw(&self, canvas: &skia::Canvas, plot: RectF, theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
        if self.axis_visible {
            self.draw_axes_body(canvas, plot, theme, shaper, draw_labels);
        }
        if draw_labels {
            for a in &self.annotations {
                let spec = a.spec(Self::annotation_default_size(theme), theme.text);
                a.draw(canvas, plot, &spec, shaper);
            }
        }
    }

    fn draw_axes_body(&self, canvas: &skia::Canvas, plot: RectF, theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
        let mut bg = skia::Paint::default();
        bg.set_color(theme.panel_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        let sx = LinearScale::horizontal(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::vertical(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);
        let x_ticks = self.x_axis.tick_labels();
        let y_ticks = self.y_axis.tick_labels();

        if let Some(alpha) = self.grid_style(theme) {
            draw_grid(canvas, plot, theme, alpha, &x_ticks, &y_ticks, &sx, &sy);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        draw_series_set(canvas, &self.series, &sx, &sy, theme);
        let twin_scale = self.twin.as_ref().map(|twin| {
            let ty = LinearScale::vertical(plot.top, plot.bottom, twin.y_axis.min, twin.y_axis.max);
            draw_series_set(canvas, &twin.series, &sx, &ty, theme);
            ty
        });
        canvas.restore();

        if let Some(spine) = theme.spine {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(theme.spine_width);
            paint.set_color(spine);
            canvas.draw_rect(plot.to_skia(), &paint);
        }

        if let Some(tick_color) = theme.tick_mark {
            draw_tick_marks(canvas, plot, tick_color, &x_ticks, &y_ticks, &sx, &sy,
                twin_scale.as_ref().zip(self.twin.as_ref()).map(|(ty, t)| (ty, t.y_axis.tick_labels())));
        }

        if !draw_labels {
            return;
        }
        let tick_len = if theme.tick_mark.is_some() { TICK_LENGTH } else { 0.0 };
        let tick_spec = TextSpec::new(theme.tick_size, theme.tick_label);
        let label_spec = TextSpec::new(theme.label_size, theme.axis_label);

        // X tick labels and axis label.
        let x_label_top = plot.bottom + tick_len + TICK_PAD;
        let mut x_ticks_h: f32 = 0.0;
        for (v, text) in &x_ticks {
            shaper.draw(canvas, text, &tick_spec, (sx.to_px(*v), x_label_top), HAlign::Center, VAlign::Top);
            x_ticks_h = x_ticks_h.max(shaper.measure(text, &tick_spec).1);
        }
        if !self.x_axis.label.is_empty() {
            let spec = axis_label_spec(&self.x_axis, label_spec);
            shaper.draw(canvas, &self.x_axis.label, &spec,
                (plot.center_x(), x_label_top + x_ticks_h + LABEL_PAD), HAlign::Center, VAlign::Top);
        }

        // Primary Y on the left.
        let y_right = plot.left - tick_len - TICK_PAD;
        let mut y_ticks_w: f32 = 0.0;
        for (v, text) in &y_ticks {
            shaper.draw(canvas, text, &tick_spec, (y_right, sy.to_px(*v)), HAlign::Right, VAlign::Center);
            y_ticks_w = y_ticks_w.max(shaper.measure_width(text, &tick_spec));
        }
        if !self.y_axis.label.is_empty() {
            let spec = axis_label_spec(&self.y_axis, label_spec);
            let h = shaper.measure(&self.y_axis.label, &spec).1;
            shaper.draw_vertical(canvas, &self.y_axis.label, &spec,
                (y_right - y_ticks_w - LABEL_PAD - h * 0.5, plot.center_y()));
        }

        // Twin Y on the right.
        if let (Some(twin), Some(ty)) = (&self.twin, twin_scale.as_ref()) {
            let left = plot.right + tick_len + TICK_PAD;
            let mut w_max: f32 = 0.0;
            for (v, text) in twin.y_axis.tick_labels() {
                shaper.draw(canvas, &text, &tick_spec, (left, ty.to_px(v)), HAlign::Left, VAlign::Center);
                w_max = w_max.max(shaper.measure_width(&text, &tick_spec));
            }
            if !twin.y_axis.label.is_empty() {
                let spec = axis_label_spec(&twin.y_axis, label_spec);
                let h = shaper.measure(&twin.y_axis.label, &spec).1;
                shaper.draw_vertical(canvas, &twin.y_axis.label, &spec,
                    (left + w_max + LABEL_PAD + h * 0.5, plot.center_y()));
            }
        }

        if let Some((text, spec)) = self.title_spec(theme) {
            shaper.draw(canvas, text, &spec, (plot.center_x(), plot.top - TITLE_PAD), HAlign::Center, VAlign::Bottom);
        }

        if let Some(lg) = &self.legend {
            let entries = match &lg.entries {
                Some(e) => e.clone(),
                None => self.legend_entries(theme),
            };
            if entries.is_empty() {
                return;
            }
            let size = lg.font_size.unwrap_or(theme.legend_size);
            let spec = TextSpec::new(size, theme.text);
            let dims = legend::measure(&entries, &spec, shaper);
            let mut obstacles = series_footprint(&self.series, &sx, &sy);
            if let (Some(twin), Some(ty)) = (&self.twin, twin_scale.as_ref()) {
                obstacles.extend(series_footprint(&twin.series, &sx, ty));
            }
            let rect = legend::place(lg.location, plot, dims, size, &obstacles);
            legend::draw(canvas, &entries, rect, &spec, theme, shaper);
        }
    }
}

fn axis_label_spec(axis: &Axis, base: TextSpec) -> TextSpec {
    match axis.label_color {
        Some(c) => TextSpec { color: c, ..base },
        None => base,
    }
}

/// Depth of one axis side: tick marks, tick labels, axis label.
fn side_extent(
    axis: &Axis,
    tick_spec: &TextSpec,
    label_spec: &TextSpec,
    tick_len: f32,
    shaper: &TextShaper,
    vertical: bool,
) -> f32 {
    let mut ticks_depth: f32 = 0.0;
    for (_, text) in axis.tick_labels() {
        let (w, h) = shaper.measure(&text, tick_spec);
        ticks_depth = ticks_depth.max(if vertical { w } else { h });
    }
    let mut depth = tick_len + TICK_PAD + ticks_depth;
    if !axis.label.is_empty() {
        depth += LABEL_PAD + shaper.measure(&axis.label, label_spec).1;
    }
    depth
}

fn data_extent(series: &[Series]) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (sx0, sx1, sy0, sy1) in series.iter().filter_map(Series::extent) {
        x_min = x_min.min(sx0);
        x_max = x_max.max(sx1);
        y_min = y_min.min(sy0);
        y_max = y_max.max(sy1);
    }
    (x_min, x_max, y_min, y_max)
}

/// Shapes the data occupies on screen, used for legend placement.
fn series_footprint(series: &[Series], sx: &LinearScale, sy: &LinearScale) -> Vec<RectF> {
    let mut out = Vec::new();
    for s in series {
        match s.series_type {
            SeriesType::Bar => {
                for &(x, h) in &s.data_xy {
                    let (l, r) = (sx.to_px(x - s.bar_width * 0.5), sx.to_px(x + s.bar_width * 0.5));
                    let (a, b) = (sy.to_px(s.baseline_value()), sy.to_px(h));
                    out.push(RectF::from_ltrb(l.min(r), a.min(b), l.max(r), a.max(b)));
                }
            }
            SeriesType::Line => {
                // Sample along segments so lines crossing a corner are seen.
                for pair in s.data_xy.windows(2) {
                    let (x0, y0) = pair[0];
                    let (x1, y1) = pair[1];
                    for k in 0..=8 {
                        let t = f64::from(k) / 8.0;
                        let px = sx.to_px(x0 + (x1 - x0) * t);
                        let py = sy.to_px(y0 + (y1 - y0) * t);
                        out.push(RectF::from_ltrb(px, py, px, py));
                    }
                }
                if let [(x, y)] = s.data_xy.as_slice() {
                    let (px, py) = (sx.to_px(*x), sy.to_px(*y));
                    out.push(RectF::from_ltrb(px, py, px, py));
                }
            }
            SeriesType::HLine => {
                let y = sy.to_px(s.baseline_value());
                for k in 0..=16 {
                    let px = sx.px0 + (sx.px1 - sx.px0) * k as f32 / 16.0;
                    out.push(RectF::from_ltrb(px, y, px, y));
                }
            }
        }
    }
    out
}

// ---- helpers ----------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    theme: &Theme,
    alpha: f32,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    sx: &LinearScale,
    sy: &LinearScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_alpha_f(alpha);
    paint.set_anti_alias(true);
    paint.set_stroke_width(theme.grid_width);

    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: RectF,
    color: skia::Color,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    sx: &LinearScale,
    sy: &LinearScale,
    twin: Option<(&LinearScale, Vec<(f64, String)>)>,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);
    paint.set_color(color);
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LENGTH), &paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left - TICK_LENGTH, y), (plot.left, y), &paint);
    }
    if let Some((ty, ticks)) = twin {
        for (v, _) in &ticks {
            let y = ty.to_px(*v);
            canvas.draw_line((plot.right, y), (plot.right + TICK_LENGTH, y), &paint);
        }
    }
}

/// Bars first, then lines and reference lines, each in insertion order.
fn draw_series_set(canvas: &skia::Canvas, series: &[Series], sx: &LinearScale, sy: &LinearScale, theme: &Theme) {
    for s in series.iter().filter(|s| s.series_type == SeriesType::Bar) {
        draw_bar_series(canvas, sx, sy, s, theme);
    }
    for s in series.iter().filter(|s| s.series_type != SeriesType::Bar) {
        match s.series_type {
            SeriesType::Line => draw_line_series(canvas, sx, sy, s, theme),
            SeriesType::HLine => draw_hline(canvas, sx, sy, s, theme),
            SeriesType::Bar => {}
        }
    }
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(color);
    if let Some([on, off]) = style.dash_pattern() {
        stroke.set_stroke_cap(skia::paint::Cap::Butt);
        stroke.set_path_effect(skia::PathEffect::dash(&[on * width, off * width], 0.0));
    }
    stroke
}

pub(crate) fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), size: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(color);
    let r = size * 0.5;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), &fill);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r, y));
            path.line_to((x, y + r));
            path.line_to((x - r, y));
            path.close();
            canvas.draw_path(&path, &fill);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, theme: &Theme) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }
    let color = series.paint_color();
    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
        let width = series.line_width.unwrap_or(theme.line_width);
        canvas.draw_path(&path, &stroke_paint(color, width, series.line_style));
    }
    for &(x, y) in data {
        draw_marker(canvas, series.marker, (sx.to_px(x), sy.to_px(y)), series.marker_size, color);
    }
}

fn draw_hline(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, theme: &Theme) {
    let y = sy.to_px(series.baseline_value());
    let width = series.line_width.unwrap_or(theme.line_width);
    let paint = stroke_paint(series.paint_color(), width, series.line_style);
    canvas.draw_line((sx.px0, y), (sx.px1, y), &paint);
}

fn draw_bar_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, theme: &Theme) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(series.paint_color());

    let edge = theme.bar_edge.map(|c| {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(1.0);
        p.set_color(c);
        p
    });

    let base = sy.to_px(series.baseline_value());
    let half = series.bar_width * 0.5;
    for &(x, h) in &series.data_xy {
        let l = sx.to_px(x - half);
        let r = sx.to_px(x + half);
        let top = sy.to_px(h);
        let rect = skia::Rect::from_ltrb(l.min(r), top.min(base), l.max(r), top.max(base));
        canvas.draw_rect(rect, &body);
        if let Some(edge) = &edge {
            canvas.draw_rect(rect, edge);
        }
    }
}
