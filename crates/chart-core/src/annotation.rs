// File: crates/chart-core/src/annotation.rs
// Summary: Free text placed in axes-fraction coordinates, optionally inside a rounded box.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::{FontWeight, HAlign, TextShaper, TextSpec, VAlign};

/// Background box behind an annotation.
#[derive(Clone, Copy, Debug)]
pub struct TextBox {
    pub fill: skia::Color,
    pub alpha: f32,
    /// Padding in units of the annotation font size.
    pub pad: f32,
    /// Corner radius in units of the annotation font size.
    pub rounding: f32,
}

impl TextBox {
    pub fn rounded(fill: skia::Color, alpha: f32, pad: f32) -> Self {
        Self { fill, alpha, pad, rounding: pad }
    }
}

#[derive(Clone, Debug)]
pub struct Annotation {
    pub text: String,
    /// Anchor in axes fraction; values outside `[0, 1]` land outside the plot area.
    pub x: f32,
    pub y: f32,
    pub size: Option<f32>,
    pub weight: FontWeight,
    pub italic: bool,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub color: Option<skia::Color>,
    pub bbox: Option<TextBox>,
}

impl Annotation {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size: None,
            weight: FontWeight::Normal,
            italic: false,
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
            color: None,
            bbox: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }

    pub fn with_box(mut self, bbox: TextBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub(crate) fn spec(&self, default_size: f32, default_color: skia::Color) -> TextSpec {
        let mut spec = TextSpec::new(self.size.unwrap_or(default_size), self.color.unwrap_or(default_color))
            .weight(self.weight);
        if self.italic {
            spec = spec.italic();
        }
        spec
    }

    /// Extent of the text (and its box) in points for a plot rectangle.
    pub fn bounds(&self, plot: RectF, spec: &TextSpec, shaper: &TextShaper) -> RectF {
        let (w, h) = shaper.measure(&self.text, spec);
        let (ax, ay) = plot.at_fraction(self.x, self.y);
        let left = match self.h_align {
            HAlign::Left => ax,
            HAlign::Center => ax - w * 0.5,
            HAlign::Right => ax - w,
        };
        let top = match self.v_align {
            VAlign::Top => ay,
            VAlign::Center => ay - h * 0.5,
            VAlign::Bottom => ay - h,
        };
        let pad = self.bbox.map_or(0.0, |b| b.pad * spec.size);
        RectF::from_ltrb(left - pad, top - pad, left + w + pad, top + h + pad)
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, plot: RectF, spec: &TextSpec, shaper: &TextShaper) {
        if let Some(b) = self.bbox {
            let r = self.bounds(plot, spec, shaper);
            let radius = b.rounding * spec.size;
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(b.fill);
            fill.set_alpha_f(b.alpha);
            canvas.draw_rrect(skia::RRect::new_rect_xy(r.to_skia(), radius, radius), &fill);
        }
        let anchor = plot.at_fraction(self.x, self.y);
        shaper.draw(canvas, &self.text, spec, anchor, self.h_align, self.v_align);
    }
}
