// File: crates/vaccine-dashboard/src/output.rs
// Summary: Final layout pass, PNG write, path report and interactive display.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{save_png, Figure, RenderOptions};
use tracing::info;

use crate::config::DashboardConfig;

/// Absolute form of `path` without touching the filesystem.
pub fn absolute_output_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("resolving {}", path.display()))
}

/// Console line announcing the written image.
pub fn report_line(path: &Path) -> String {
    format!("Successfully generated: {}", path.display())
}

/// Tighten the layout, write the PNG, print its absolute path and, if
/// configured, show the image until the viewer window closes.
pub fn finalize(mut fig: Figure, cfg: &DashboardConfig) -> Result<PathBuf> {
    fig.tight_layout(cfg.layout_rect).context("applying layout")?;

    let opts = RenderOptions {
        dpi: cfg.dpi,
        tight_bbox: cfg.tight_bbox,
        pad_inches: cfg.pad_inches,
        draw_labels: true,
    };
    let frame = fig.render_to_rgba8(&opts).context("rendering dashboard")?;
    save_png(&frame, &cfg.output_file)
        .with_context(|| format!("writing {}", cfg.output_file.display()))?;

    let abs = absolute_output_path(&cfg.output_file)?;
    println!("{}", report_line(&abs));

    if cfg.show_window {
        let title = fig.suptitle_text().unwrap_or("Dashboard");
        info!("opening viewer");
        chart_viewer::show_blocking(&frame, title).context("displaying dashboard")?;
    }
    Ok(abs)
}
