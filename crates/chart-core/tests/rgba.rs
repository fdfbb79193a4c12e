// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, background and tight cropping.

use chart_core::{Figure, RenderOptions, Series, Theme};

fn line_figure() -> Figure {
    let mut fig = Figure::single(Theme::seaborn_darkgrid()).expect("figure");
    let ax = fig.panel_mut(0, 0).expect("panel");
    ax.set_ylim(0.0, 4.0);
    ax.add_series(Series::line(vec![(0.0, 0.0), (4.0, 4.0)]));
    fig
}

#[test]
fn render_rgba8_buffer() {
    let mut fig = line_figure();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let img = fig.render_to_rgba8(&opts).expect("rgba render");

    let (w, h) = fig.size_px(opts.dpi);
    assert_eq!((img.width(), img.height()), (w as u32, h as u32));
    assert_eq!(img.as_raw().len(), w as usize * h as usize * 4);

    // Figure background is opaque white in the corner.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn dpi_scales_raster_size() {
    let fig = line_figure();
    assert_eq!(fig.size_px(100.0), (640, 480));
    assert_eq!(fig.size_px(300.0), (1920, 1440));
}

#[test]
fn tight_bbox_never_grows_frame() {
    let mut fig = line_figure();
    let full = fig
        .render_to_rgba8(&RenderOptions { draw_labels: false, ..RenderOptions::default() })
        .expect("full");
    let tight = fig
        .render_to_rgba8(&RenderOptions { draw_labels: false, tight_bbox: true, ..RenderOptions::default() })
        .expect("tight");
    assert!(tight.width() <= full.width());
    assert!(tight.height() <= full.height());
    assert!(tight.width() < full.width() || tight.height() < full.height());
}
