// File: crates/vaccine-dashboard/src/config.rs
// Summary: Fixed dashboard settings; the binary always runs with the defaults.

use std::path::PathBuf;

pub const OUTPUT_FILE: &str = "vaccine_analysis_dashboard.png";
pub const PREFERRED_STYLE: &str = "seaborn-v0_8-darkgrid";
pub const FALLBACK_STYLE: &str = "ggplot";

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Relative paths resolve against the working directory.
    pub output_file: PathBuf,
    pub dpi: f32,
    /// Figure size in inches.
    pub figsize: (f32, f32),
    pub preferred_style: String,
    pub fallback_style: String,
    /// Normalized `[left, bottom, right, top]` area for panels; the rest holds
    /// the suptitle and footnotes.
    pub layout_rect: [f32; 4],
    pub tight_bbox: bool,
    pub pad_inches: f32,
    /// Open the blocking viewer after saving.
    pub show_window: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(OUTPUT_FILE),
            dpi: 300.0,
            figsize: (18.0, 14.0),
            preferred_style: PREFERRED_STYLE.to_string(),
            fallback_style: FALLBACK_STYLE.to_string(),
            layout_rect: [0.0, 0.03, 1.0, 0.95],
            tight_bbox: true,
            pad_inches: 0.1,
            show_window: true,
        }
    }
}
