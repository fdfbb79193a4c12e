// File: crates/vaccine-dashboard/src/style.rs
// Summary: Theme selection with a single fallback.

use anyhow::{Context, Result};
use chart_core::theme;
use chart_core::Theme;

use crate::config::DashboardConfig;

/// Preferred style if known, otherwise the fallback; a missing fallback is fatal.
pub fn setup_style(cfg: &DashboardConfig) -> Result<Theme> {
    theme::select(&cfg.preferred_style, &cfg.fallback_style)
        .with_context(|| format!("no usable style (tried '{}' then '{}')", cfg.preferred_style, cfg.fallback_style))
}
