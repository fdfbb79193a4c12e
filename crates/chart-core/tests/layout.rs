// File: crates/chart-core/tests/layout.rs
// Purpose: Grid layout geometry and slot addressing.

use chart_core::layout::grid_plot_rects;
use chart_core::types::Insets;
use chart_core::{ChartError, Figure, Theme};

#[test]
fn grid_cells_are_equal_and_ordered() {
    let deco = vec![Insets::new(30.0, 0.0, 20.0, 25.0); 4];
    let rects = grid_plot_rects(1296.0, 1008.0, 2, 2, [0.0, 0.03, 1.0, 0.95], &deco, 10.8).expect("layout");
    assert_eq!(rects.len(), 4);
    for r in &rects {
        assert!((r.width() - rects[0].width()).abs() < 1e-3);
        assert!((r.height() - rects[0].height()).abs() < 1e-3);
    }
    // Row-major: (0,1) is right of (0,0); (1,0) is below (0,0).
    assert!(rects[1].left > rects[0].right);
    assert!(rects[2].top > rects[0].bottom);
    // Reserved bands: top 5% and bottom 3% stay free of plots.
    assert!(rects[0].top >= 1008.0 * 0.05);
    assert!(rects[2].bottom <= 1008.0 * 0.97);
}

#[test]
fn oversized_decorations_are_rejected() {
    let deco = vec![Insets::new(500.0, 500.0, 0.0, 0.0)];
    let err = grid_plot_rects(400.0, 300.0, 1, 1, [0.0, 0.0, 1.0, 1.0], &deco, 10.0).expect_err("no room");
    assert!(matches!(err, ChartError::InvalidLayout(_)));
}

#[test]
fn tight_layout_validates_rect() {
    let mut fig = Figure::subplots(2, 2, (18.0, 14.0), Theme::classic()).expect("figure");
    assert!(fig.tight_layout([0.0, 0.03, 1.0, 0.95]).is_ok());
    assert!(matches!(fig.tight_layout([0.5, 0.0, 0.4, 1.0]), Err(ChartError::InvalidLayout(_))));
    assert!(matches!(fig.tight_layout([0.0, 0.0, 1.2, 1.0]), Err(ChartError::InvalidLayout(_))));
}

#[test]
fn panel_slots_are_bounds_checked() {
    let mut fig = Figure::subplots(2, 2, (18.0, 14.0), Theme::classic()).expect("figure");
    assert!(fig.panel_mut(1, 1).is_ok());
    let err = fig.panel_mut(2, 0).err().expect("out of range");
    assert!(matches!(err, ChartError::InvalidSlot { row: 2, col: 0, rows: 2, cols: 2 }));
    assert!(Figure::subplots(0, 2, (1.0, 1.0), Theme::classic()).is_err());
}
