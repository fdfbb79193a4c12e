// File: crates/chart-core/src/figure.rs
// Summary: Figure (grid of chart panels) and headless rendering pipeline using Skia
//          CPU raster surfaces, with optional tight-bbox crop and PNG output.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use skia_safe as skia;
use tracing::{debug, info};

use crate::chart::{Chart, AUTO_MARGIN};
use crate::crop::crop_to_content;
use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::layout::{grid_plot_rects, validate_rect, FigureRect, FULL_RECT};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{DEFAULT_DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN, POINTS_PER_INCH, TIGHT_PAD_FRACTION};

pub struct RenderOptions {
    pub dpi: f32,
    /// Crop to the drawn content plus `pad_inches`.
    pub tight_bbox: bool,
    pub pad_inches: f32,
    /// Text can be turned off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI, tight_bbox: false, pad_inches: 0.1, draw_labels: true }
    }
}

#[derive(Clone, Debug)]
struct Suptitle {
    text: String,
    size: f32,
    bold: bool,
    /// Top edge as a fraction of figure height from the bottom.
    y: f32,
}

pub struct Figure {
    width_in: f32,
    height_in: f32,
    rows: usize,
    cols: usize,
    theme: Theme,
    panels: Vec<Chart>,
    suptitle: Option<Suptitle>,
    layout_rect: FigureRect,
    shaper: TextShaper,
}

impl Figure {
    /// Figure of `rows x cols` empty panels, `size` in inches.
    pub fn subplots(rows: usize, cols: usize, size: (f32, f32), theme: Theme) -> ChartResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ChartError::InvalidLayout(format!("grid must be non-empty, got {rows}x{cols}")));
        }
        let (width_in, height_in) = size;
        if !(width_in > 0.0 && height_in > 0.0) {
            return Err(ChartError::InvalidLayout(format!("figure size must be positive, got {width_in}x{height_in}")));
        }
        Ok(Self {
            width_in,
            height_in,
            rows,
            cols,
            theme,
            panels: (0..rows * cols).map(|_| Chart::new()).collect(),
            suptitle: None,
            layout_rect: FULL_RECT,
            shaper: TextShaper::new(),
        })
    }

    /// Single-panel figure at the default size.
    pub fn single(theme: Theme) -> ChartResult<Self> {
        Self::subplots(1, 1, (FIG_WIDTH_IN, FIG_HEIGHT_IN), theme)
    }

    pub fn grid_shape(&self) -> (usize, usize) { (self.rows, self.cols) }

    /// Figure size in points.
    pub fn size_points(&self) -> (f32, f32) {
        (self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }

    /// Raster size in pixels at `dpi`.
    pub fn size_px(&self, dpi: f32) -> (i32, i32) {
        ((self.width_in * dpi).round().max(1.0) as i32, (self.height_in * dpi).round().max(1.0) as i32)
    }

    pub fn suptitle(&mut self, text: impl Into<String>, size: f32, bold: bool, y: f32) {
        self.suptitle = Some(Suptitle { text: text.into(), size, bold, y });
    }

    pub fn suptitle_text(&self) -> Option<&str> {
        self.suptitle.as_ref().map(|s| s.text.as_str())
    }

    fn slot(&self, row: usize, col: usize) -> ChartResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(ChartError::InvalidSlot { row, col, rows: self.rows, cols: self.cols });
        }
        Ok(row * self.cols + col)
    }

    pub fn panel(&self, row: usize, col: usize) -> ChartResult<&Chart> {
        let i = self.slot(row, col)?;
        Ok(&self.panels[i])
    }

    pub fn panel_mut(&mut self, row: usize, col: usize) -> ChartResult<&mut Chart> {
        let i = self.slot(row, col)?;
        Ok(&mut self.panels[i])
    }

    /// Reserve the area outside normalized `rect` (`[left, bottom, right, top]`)
    /// and fit panels and their decorations inside it.
    pub fn tight_layout(&mut self, rect: FigureRect) -> ChartResult<()> {
        validate_rect(rect)?;
        self.layout_rect = rect;
        Ok(())
    }

    /// Plot rectangles in points, row-major.
    pub fn plot_rects(&self) -> ChartResult<Vec<RectF>> {
        let (w, h) = self.size_points();
        let pad = TIGHT_PAD_FRACTION * self.theme.font_size;
        let first: Vec<_> = self.panels.iter()
            .map(|p| p.decorations(&self.theme, &self.shaper, None))
            .collect();
        let rects = grid_plot_rects(w, h, self.rows, self.cols, self.layout_rect, &first, pad)?;
        // Second pass: annotations anchored outside a plot depend on its size.
        let second: Vec<_> = self.panels.iter().zip(&rects)
            .map(|(p, r)| p.decorations(&self.theme, &self.shaper, Some(*r)))
            .collect();
        if second == first {
            return Ok(rects);
        }
        grid_plot_rects(w, h, self.rows, self.cols, self.layout_rect, &second, pad)
    }

    fn paint(&mut self, canvas: &skia::Canvas, draw_labels: bool) -> ChartResult<()> {
        for panel in &mut self.panels {
            panel.autoscale_axes(AUTO_MARGIN);
        }
        let rects = self.plot_rects()?;
        for (i, (panel, rect)) in self.panels.iter().zip(&rects).enumerate() {
            debug!(panel = i, left = rect.left, top = rect.top, width = rect.width(), height = rect.height(), "panel layout");
            panel.draw(canvas, *rect, &self.theme, &self.shaper, draw_labels);
        }
        if let (Some(st), true) = (&self.suptitle, draw_labels) {
            let (w, h) = self.size_points();
            let mut spec = TextSpec::new(st.size, self.theme.text);
            if st.bold {
                spec = spec.bold();
            }
            self.shaper.draw(canvas, &st.text, &spec, (w * 0.5, (1.0 - st.y) * h), HAlign::Center, VAlign::Top);
        }
        Ok(())
    }

    /// Rasterize to an RGBA8 buffer (cropped when `opts.tight_bbox`).
    pub fn render_to_rgba8(&mut self, opts: &RenderOptions) -> ChartResult<RgbaImage> {
        let (width, height) = self.size_px(opts.dpi);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        {
            let canvas = surface.canvas();
            canvas.clear(self.theme.figure_background);
            let scale = opts.dpi / POINTS_PER_INCH;
            canvas.scale((scale, scale));
            self.paint(canvas, opts.draw_labels)?;
        }

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        let frame = RgbaImage::from_raw(width as u32, height as u32, pixels).ok_or(ChartError::ReadPixels)?;

        if !opts.tight_bbox {
            return Ok(frame);
        }
        let bg = self.theme.figure_background;
        let pad = (opts.pad_inches * opts.dpi).round() as i32;
        let cropped = crop_to_content(frame, [bg.r(), bg.g(), bg.b(), bg.a()], pad);
        debug!(width = cropped.width(), height = cropped.height(), "tight bbox crop");
        Ok(cropped)
    }

    pub fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let frame = self.render_to_rgba8(opts)?;
        encode_png(&frame)
    }

    /// Render the figure to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> ChartResult<()> {
        let frame = self.render_to_rgba8(opts)?;
        save_png(&frame, output_png_path)
    }
}

pub fn encode_png(frame: &RgbaImage) -> ChartResult<Vec<u8>> {
    let mut bytes = Vec::new();
    frame.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write `frame` as PNG, creating parent directories as needed.
pub fn save_png(frame: &RgbaImage, path: impl AsRef<Path>) -> ChartResult<()> {
    let path = path.as_ref();
    let data = encode_png(frame)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &data)?;
    info!(path = %path.display(), bytes = data.len(), width = frame.width(), height = frame.height(), "wrote png");
    Ok(())
}
