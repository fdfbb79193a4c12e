// File: crates/chart-core/src/layout.rs
// Summary: Tight grid layout: equal-size plot areas sized around measured decorations.

use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::types::Insets;

/// Normalized figure rectangle `[left, bottom, right, top]` (origin bottom-left).
pub type FigureRect = [f32; 4];

pub const FULL_RECT: FigureRect = [0.0, 0.0, 1.0, 1.0];

pub fn validate_rect(rect: FigureRect) -> ChartResult<()> {
    let [l, b, r, t] = rect;
    let in_unit = rect.iter().all(|v| (0.0..=1.0).contains(v));
    if !in_unit || l >= r || b >= t {
        return Err(ChartError::InvalidLayout(format!("rect {rect:?} is not an ordered sub-rectangle of [0, 1]")));
    }
    Ok(())
}

/// Plot rectangles (row-major) for a `rows x cols` grid inside `rect` of a
/// `width x height` point figure. `decorations[i]` is the space panel `i`
/// needs outside its plot area; `pad` separates neighbours and figure edges.
pub fn grid_plot_rects(
    width: f32,
    height: f32,
    rows: usize,
    cols: usize,
    rect: FigureRect,
    decorations: &[Insets],
    pad: f32,
) -> ChartResult<Vec<RectF>> {
    validate_rect(rect)?;
    if rows == 0 || cols == 0 || decorations.len() != rows * cols {
        return Err(ChartError::InvalidLayout(format!(
            "{} decorations for a {rows}x{cols} grid", decorations.len()
        )));
    }
    let [l, b, r, t] = rect;
    let region = RectF::from_ltrb(l * width + pad, (1.0 - t) * height + pad, r * width - pad, (1.0 - b) * height - pad);

    let mut col_left = vec![0.0f32; cols];
    let mut col_right = vec![0.0f32; cols];
    let mut row_top = vec![0.0f32; rows];
    let mut row_bottom = vec![0.0f32; rows];
    for (i, d) in decorations.iter().enumerate() {
        let (row, col) = (i / cols, i % cols);
        col_left[col] = col_left[col].max(d.left);
        col_right[col] = col_right[col].max(d.right);
        row_top[row] = row_top[row].max(d.top);
        row_bottom[row] = row_bottom[row].max(d.bottom);
    }

    let cell_w = (region.width()
        - col_left.iter().sum::<f32>()
        - col_right.iter().sum::<f32>()
        - pad * (cols as f32 - 1.0))
        / cols as f32;
    let cell_h = (region.height()
        - row_top.iter().sum::<f32>()
        - row_bottom.iter().sum::<f32>()
        - pad * (rows as f32 - 1.0))
        / rows as f32;
    if cell_w <= 0.0 || cell_h <= 0.0 {
        return Err(ChartError::InvalidLayout(format!(
            "decorations leave no room for plots ({cell_w:.1} x {cell_h:.1} pt)"
        )));
    }

    let mut lefts = Vec::with_capacity(cols);
    let mut x = region.left;
    for c in 0..cols {
        lefts.push(x + col_left[c]);
        x += col_left[c] + cell_w + col_right[c] + pad;
    }
    let mut tops = Vec::with_capacity(rows);
    let mut y = region.top;
    for rw in 0..rows {
        tops.push(y + row_top[rw]);
        y += row_top[rw] + cell_h + row_bottom[rw] + pad;
    }

    let mut out = Vec::with_capacity(rows * cols);
    for top in &tops {
        for left in &lefts {
            out.push(RectF::from_ltwh(*left, *top, cell_w, cell_h));
        }
    }
    Ok(out)
}
