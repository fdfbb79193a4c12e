// File: crates/vaccine-dashboard/tests/render.rs
// Purpose: End-to-end dashboard rendering without opening a window.

use std::path::Path;

use chart_core::{theme, LegendLocation};
use vaccine_dashboard::config::OUTPUT_FILE;
use vaccine_dashboard::{build_figure, output, run, DashboardConfig};

fn headless_config(dir: &Path) -> DashboardConfig {
    DashboardConfig {
        output_file: dir.join(OUTPUT_FILE),
        dpi: 40.0,
        show_window: false,
        ..DashboardConfig::default()
    }
}

#[test]
fn writes_non_empty_png_and_reports_absolute_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = headless_config(dir.path());

    let path = run(&cfg).expect("dashboard renders");
    assert!(path.is_absolute());
    assert!(path.ends_with(OUTPUT_FILE));

    let bytes = std::fs::read(&path).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decodes");
    // Tight crop never exceeds the 18x14 inch canvas.
    assert!(img.width() <= 720 && img.height() <= 560);
    assert!(img.width() > 0 && img.height() > 0);
}

#[test]
fn rerun_overwrites_same_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = headless_config(dir.path());

    let first = run(&cfg).expect("first run");
    let second = run(&cfg).expect("second run");
    assert_eq!(first.display().to_string(), second.display().to_string());
    assert_eq!(std::fs::read_dir(dir.path()).expect("list").count(), 1);
}

#[test]
fn unknown_preferred_style_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = DashboardConfig {
        preferred_style: "seaborn-does-not-exist".into(),
        ..headless_config(dir.path())
    };
    let path = run(&cfg).expect("fallback style still renders");
    assert!(path.exists());
}

#[test]
fn missing_fallback_style_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = DashboardConfig {
        preferred_style: "nope".into(),
        fallback_style: "also-nope".into(),
        ..headless_config(dir.path())
    };
    assert!(run(&cfg).is_err());
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn relative_output_resolves_to_absolute() {
    let abs = output::absolute_output_path(Path::new(OUTPUT_FILE)).expect("absolute");
    assert!(abs.is_absolute());
    assert!(abs.ends_with(OUTPUT_FILE));
    let again = output::absolute_output_path(Path::new(OUTPUT_FILE)).expect("absolute");
    assert_eq!(abs, again);
}

#[test]
fn console_line_names_absolute_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = run(&headless_config(dir.path())).expect("dashboard renders");

    let line = output::report_line(&path);
    let shown = line.strip_prefix("Successfully generated: ").expect("prefix");
    assert!(Path::new(shown).is_absolute(), "{shown} should be absolute");
    assert!(shown.ends_with("vaccine_analysis_dashboard.png"));
    assert!(!line.contains('\n'));
}

#[test]
fn panels_occupy_expected_slots() {
    let theme = theme::find("ggplot").expect("theme");
    let fig = build_figure(theme, &DashboardConfig::default()).expect("figure");
    assert_eq!(fig.grid_shape(), (2, 2));

    let waning = fig.panel(0, 0).expect("waning");
    assert_eq!(waning.series.len(), 3);
    assert_eq!((waning.y_axis.min, waning.y_axis.max), (0.0, 100.0));

    let ages = fig.panel(0, 1).expect("ages");
    // Absent metrics produce no bars: 3 ED/UC values and 3 hospitalization values.
    assert_eq!(ages.series[0].data_xy.len(), 3);
    assert_eq!(ages.series[1].data_xy.len(), 3);

    let doses = fig.panel(1, 0).expect("doses");
    let legend = doses.legend.as_ref().expect("combined legend");
    assert_eq!(legend.location, LegendLocation::UpperLeft);
    let labels: Vec<_> = legend.entries.as_ref().expect("explicit entries").iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Local Reactions", "Systemic Reactions", "Effectiveness"]);
    assert_eq!(legend.font_size, Some(9.0));

    let info = fig.panel(1, 1).expect("info");
    assert!(!info.axis_visible);
    assert_eq!(info.annotations.len(), 1);
}
