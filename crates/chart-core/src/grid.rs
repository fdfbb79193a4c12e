// File: crates/chart-core/src/grid.rs
// Summary: Tick placement and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Smallest "nice" step (1, 2, 2.5, 5 x 10^k) splitting `span` into at most `max_bins` bins.
pub fn nice_step(span: f64, max_bins: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / max_bins.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let step = m * mag;
        if step >= raw * (1.0 - 1e-9) {
            return step;
        }
    }
    10.0 * mag
}

/// Tick positions on multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_bins: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(hi - lo, max_bins);
    let eps = step * 1e-9;
    let first = ((lo - eps) / step).ceil();
    let last = ((hi + eps) / step).floor();
    if last < first {
        return (Vec::new(), step);
    }
    let count = (last - first) as usize + 1;
    (linspace(first * step, last * step, count), step)
}

/// Format a tick value with just enough decimals to represent multiples of `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..6usize)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6);
    let v = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
