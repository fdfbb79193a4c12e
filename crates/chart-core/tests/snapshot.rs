// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic panels (labels off) to RGBA.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and only checks that the frame decodes at the expected size.
// Drawn content is asserted pixel by pixel in pixels.rs.

use chart_core::{Figure, LineStyle, Marker, RenderOptions, Series, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    assert_eq!(got_img.dimensions(), (640, 480), "unexpected frame size");
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render<F: FnOnce(&mut Figure)>(build: F) -> Vec<u8> {
    let mut fig = Figure::single(Theme::seaborn_darkgrid()).expect("figure");
    build(&mut fig);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    fig.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_lines_with_threshold() {
    let bytes = render(|fig| {
        let ax = fig.panel_mut(0, 0).expect("panel");
        ax.set_ylim(0.0, 100.0);
        ax.add_series(Series::line(vec![(4.0, 52.2), (10.0, 32.6), (20.0, 20.4)])
            .with_marker(Marker::Circle).with_line_width(3.0));
        ax.add_series(Series::hline(64.0).with_line_style(LineStyle::Dashed));
    });
    write_or_compare("lines_threshold.png", &bytes);
}

#[test]
fn golden_grouped_bars() {
    let bytes = render(|fig| {
        let ax = fig.panel_mut(0, 0).expect("panel");
        ax.set_ylim(0.0, 100.0);
        ax.add_series(Series::bars(vec![(-0.175, 76.0), (0.825, 56.0)], 0.35).with_alpha(0.8));
        ax.add_series(Series::bars(vec![(1.175, 33.0)], 0.35).with_alpha(0.8));
    });
    write_or_compare("grouped_bars.png", &bytes);
}
