// File: crates/chart-core/tests/legend.rs
// Purpose: Legend handle collection, twin-axis merge order and placement.

use chart_core::geometry::RectF;
use chart_core::legend::place;
use chart_core::{Chart, LegendLocation, Series, Swatch, Theme};

#[test]
fn merged_legend_lists_primary_then_twin() {
    let theme = Theme::seaborn_darkgrid();
    let mut chart = Chart::new();
    chart.add_series(Series::bars(vec![(0.0, 75.0)], 0.3).with_label("Local"));
    chart.add_series(Series::bars(vec![(0.0, 55.0)], 0.3).with_label("Systemic"));
    chart.add_series(Series::line(vec![(0.0, 1.0), (1.0, 2.0)])); // unlabeled
    chart.twinx().add_series(Series::line(vec![(0.0, 90.0), (1.0, 92.0)]).with_label("Effectiveness"));

    let mut entries = chart.legend_entries(&theme);
    entries.extend(chart.twin.as_ref().expect("twin").legend_entries(&theme));
    let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Local", "Systemic", "Effectiveness"]);

    assert!(matches!(entries[0].swatch, Swatch::Patch { .. }));
    assert!(matches!(entries[2].swatch, Swatch::Line { .. }));
}

#[test]
fn explicit_corner_is_respected() {
    let plot = RectF::from_ltwh(100.0, 50.0, 400.0, 300.0);
    let r = place(LegendLocation::UpperLeft, plot, (80.0, 40.0), 10.0, &[]);
    assert_eq!((r.left, r.top), (105.0, 55.0));
    let r = place(LegendLocation::LowerRight, plot, (80.0, 40.0), 10.0, &[]);
    assert_eq!((r.right, r.bottom), (495.0, 345.0));
}

#[test]
fn best_avoids_occupied_corner() {
    let plot = RectF::from_ltwh(0.0, 0.0, 400.0, 300.0);
    // Data crowds the upper-right corner.
    let obstacles: Vec<_> = (0..10)
        .map(|i| {
            let x = 300.0 + i as f32 * 9.0;
            RectF::from_ltrb(x, 10.0, x, 10.0)
        })
        .collect();
    let r = place(LegendLocation::Best, plot, (80.0, 40.0), 10.0, &obstacles);
    assert!(r.left < 200.0, "legend should move away from the data");
    assert!(r.top < 150.0, "upper-left is the next candidate");
}
