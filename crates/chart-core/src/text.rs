// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with anchor-based placement.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Medium,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Font parameters for one run of text.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    /// Size in points.
    pub size: f32,
    pub color: skia::Color,
    pub weight: FontWeight,
    pub italic: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, weight: FontWeight::Normal, italic: false }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self { self.weight(FontWeight::Bold) }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn font_style(&self) -> skia::FontStyle {
        let weight = match self.weight {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Medium => Weight::MEDIUM,
            FontWeight::Bold => Weight::BOLD,
        };
        let slant = if self.italic { Slant::Italic } else { Slant::Upright };
        skia::FontStyle::new(weight, Width::NORMAL, slant)
    }
}

#[derive(Clone)]
pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_style(spec.font_style());
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    /// Shape `text` (may contain newlines); lines are aligned within the longest line.
    pub fn layout(&self, text: &str, spec: &TextSpec, align: HAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        if align != HAlign::Left {
            // Re-wrap to the longest line so alignment is relative to the text block.
            let w = paragraph.longest_line().ceil() + 1.0;
            paragraph.layout(w);
        }
        paragraph
    }

    /// Block size (width, height) in points.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, spec, HAlign::Left);
        (p.longest_line(), p.height())
    }

    pub fn measure_width(&self, text: &str, spec: &TextSpec) -> f32 {
        self.measure(text, spec).0
    }

    /// Draw `text` so that the anchor `(x, y)` lands on the given block edge/center.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        spec: &TextSpec,
        (x, y): (f32, f32),
        h: HAlign,
        v: VAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let p = self.layout(text, spec, h);
        let ht = p.height();
        // Paragraph boxes are laid out wider than the text for centered/right runs.
        let box_w = p.max_width();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - box_w * 0.5,
            HAlign::Right => x - box_w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - ht * 0.5,
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw text rotated 90 degrees counter-clockwise, centered on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, spec: &TextSpec, (x, y): (f32, f32)) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, spec, (0.0, 0.0), HAlign::Center, VAlign::Center);
        canvas.restore();
    }
}
