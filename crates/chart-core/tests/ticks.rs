// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick placement and label formatting.

use chart_core::grid::{format_tick, nice_ticks};
use chart_core::Axis;

#[test]
fn percent_axis_ticks_every_twenty() {
    let (ticks, step) = nice_ticks(0.0, 100.0, 6);
    assert_eq!(step, 20.0);
    assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn ticks_stay_inside_padded_range() {
    let (ticks, step) = nice_ticks(3.0, 25.0, 6);
    assert_eq!(step, 5.0);
    assert_eq!(ticks, vec![5.0, 10.0, 15.0, 20.0, 25.0]);
}

#[test]
fn tick_labels_use_needed_decimals() {
    assert_eq!(format_tick(40.0, 20.0), "40");
    assert_eq!(format_tick(0.5, 0.5), "0.5");
    assert_eq!(format_tick(0.75, 0.25), "0.75");
    assert_eq!(format_tick(-0.0, 1.0), "0");
}

#[test]
fn category_ticks_follow_labels() {
    let mut axis = Axis::new("", -0.5, 3.5);
    axis.set_categories(["Dose 1", "Dose 2", "Dose 3", "Dose 4"]);
    let labels = axis.tick_labels();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], (0.0, "Dose 1".to_string()));
    assert_eq!(labels[3], (3.0, "Dose 4".to_string()));
}
