// File: crates/vaccine-dashboard/src/lib.rs
// Summary: Assembles the four-panel COVID-19 vaccine dashboard from literal data.

pub mod config;
pub mod data;
pub mod output;
pub mod panels;
pub mod style;

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{Figure, Theme};
use tracing::info;

pub use config::DashboardConfig;

pub const SUPTITLE: &str = "Comprehensive COVID-19 Vaccine Analysis (2021-2025)";

/// Build the 2x2 dashboard figure with every panel populated.
pub fn build_figure(theme: Theme, cfg: &DashboardConfig) -> Result<Figure> {
    let mut fig = Figure::subplots(2, 2, cfg.figsize, theme)?;
    fig.suptitle(SUPTITLE, 20.0, true, 0.98);

    panels::waning_panel(fig.panel_mut(0, 0)?, &data::INFECTION, &data::HOSPITALIZATION, data::DEATH_6MO);
    panels::age_group_panel(fig.panel_mut(0, 1)?, &data::AGE_GROUPS);
    panels::dose_panel(fig.panel_mut(1, 0)?, &data::DOSES, &theme);
    panels::info_panel(fig.panel_mut(1, 1)?, data::KEY_FINDINGS);
    info!(theme = theme.name, "dashboard panels built");
    Ok(fig)
}

/// Render the dashboard with an already-selected theme.
pub fn create_visualizations(theme: Theme, cfg: &DashboardConfig) -> Result<PathBuf> {
    let fig = build_figure(theme, cfg)?;
    output::finalize(fig, cfg)
}

/// Select the style, then render, save, report and display.
pub fn run(cfg: &DashboardConfig) -> Result<PathBuf> {
    let theme = style::setup_style(cfg)?;
    create_visualizations(theme, cfg)
}
