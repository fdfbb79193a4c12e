use anyhow::Result;
use chart_core::{Figure, LegendLocation, Marker, RenderOptions, Series, Theme};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_grid(rows: usize, cols: usize) -> Figure {
    let mut fig = Figure::subplots(rows, cols, (18.0, 14.0), Theme::seaborn_darkgrid()).expect("figure");
    for r in 0..rows {
        for c in 0..cols {
            let ax = fig.panel_mut(r, c).expect("panel");
            let data: Vec<_> = (0..64).map(|i| (i as f64, 50.0 + (i as f64 * 0.2).sin() * 40.0)).collect();
            ax.set_ylim(0.0, 100.0);
            ax.add_series(Series::line(data).with_marker(Marker::Circle).with_label("series"));
            ax.legend(LegendLocation::Best);
        }
    }
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    group.sample_size(10);
    for &dpi in &[72.0f32, 150.0] {
        group.bench_function(format!("grid_2x2_dpi_{dpi}"), |b| {
            let mut fig = build_grid(2, 2);
            let opts = RenderOptions { dpi, tight_bbox: true, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
