// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Figure, RenderOptions, Series, Theme};

#[test]
fn render_smoke_png() {
    let mut fig = Figure::single(Theme::seaborn_darkgrid()).expect("figure");
    {
        let ax = fig.panel_mut(0, 0).expect("panel");
        ax.set_title("Smoke", 12.0, true);
        ax.set_xlabel("X");
        ax.set_ylabel("Y");
        ax.add_series(Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]));
    }

    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");

    fig.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = fig.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_overwrites_existing_file() {
    let mut fig = Figure::single(Theme::classic()).expect("figure");
    fig.panel_mut(0, 0).expect("panel").add_series(Series::line(vec![(0.0, 1.0), (1.0, 2.0)]));

    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("overwrite.png");
    std::fs::write(&out, b"stale").expect("seed file");

    let opts = RenderOptions { dpi: 50.0, ..RenderOptions::default() };
    fig.render_to_png(&opts, &out).expect("first render");
    fig.render_to_png(&opts, &out).expect("second render");
    let bytes = std::fs::read(&out).expect("read back");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
