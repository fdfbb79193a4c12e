// File: crates/chart-core/src/theme.rs
// Summary: Named visual themes (matplotlib-style sheets) and fallback selection.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub figure_background: skia::Color,
    pub panel_background: skia::Color,
    /// Grid is drawn unless a panel overrides it.
    pub grid_on: bool,
    pub grid: skia::Color,
    pub grid_width: f32,
    /// Axis frame color; `None` draws no frame.
    pub spine: Option<skia::Color>,
    pub spine_width: f32,
    pub text: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    /// Tick mark color; `None` hides tick marks.
    pub tick_mark: Option<skia::Color>,
    /// Outline drawn around bars.
    pub bar_edge: Option<skia::Color>,
    pub legend_face: skia::Color,
    pub legend_edge: skia::Color,
    pub legend_alpha: f32,
    pub font_size: f32,
    pub tick_size: f32,
    pub label_size: f32,
    pub title_size: f32,
    pub legend_size: f32,
    pub line_width: f32,
}

impl Theme {
    /// Light grey-blue panels with white grid and no frame.
    pub fn seaborn_darkgrid() -> Self {
        let ink = skia::Color::from_rgb(0x26, 0x26, 0x26);
        Self {
            name: "seaborn-v0_8-darkgrid",
            figure_background: skia::Color::WHITE,
            panel_background: skia::Color::from_rgb(0xEA, 0xEA, 0xF2),
            grid_on: true,
            grid: skia::Color::WHITE,
            grid_width: 0.8,
            spine: None,
            spine_width: 0.0,
            text: ink,
            axis_label: ink,
            tick_label: ink,
            tick_mark: None,
            bar_edge: Some(skia::Color::from_rgb(0xEA, 0xEA, 0xF2)),
            legend_face: skia::Color::WHITE,
            legend_edge: skia::Color::from_rgb(0xCC, 0xCC, 0xCC),
            legend_alpha: 0.8,
            font_size: 10.0,
            tick_size: 10.0,
            label_size: 10.0,
            title_size: 12.0,
            legend_size: 10.0,
            line_width: 1.5,
        }
    }

    /// R/ggplot2-like grey panels.
    pub fn ggplot() -> Self {
        let ink = skia::Color::from_rgb(0x55, 0x55, 0x55);
        Self {
            name: "ggplot",
            figure_background: skia::Color::WHITE,
            panel_background: skia::Color::from_rgb(0xE5, 0xE5, 0xE5),
            grid_on: true,
            grid: skia::Color::WHITE,
            grid_width: 0.8,
            spine: None,
            spine_width: 0.0,
            text: skia::Color::BLACK,
            axis_label: ink,
            tick_label: ink,
            tick_mark: Some(ink),
            bar_edge: Some(skia::Color::from_rgb(0xEE, 0xEE, 0xEE)),
            legend_face: skia::Color::WHITE,
            legend_edge: skia::Color::from_rgb(0xCC, 0xCC, 0xCC),
            legend_alpha: 0.8,
            font_size: 10.0,
            tick_size: 10.0,
            label_size: 12.0,
            title_size: 14.4,
            legend_size: 10.0,
            line_width: 1.5,
        }
    }

    /// White panels with a black frame and grid off by default.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            figure_background: skia::Color::WHITE,
            panel_background: skia::Color::WHITE,
            grid_on: false,
            grid: skia::Color::from_rgb(0xB0, 0xB0, 0xB0),
            grid_width: 0.8,
            spine: Some(skia::Color::BLACK),
            spine_width: 0.8,
            text: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            tick_mark: Some(skia::Color::BLACK),
            bar_edge: None,
            legend_face: skia::Color::WHITE,
            legend_edge: skia::Color::from_rgb(0xCC, 0xCC, 0xCC),
            legend_alpha: 0.8,
            font_size: 10.0,
            tick_size: 10.0,
            label_size: 10.0,
            title_size: 12.0,
            legend_size: 10.0,
            line_width: 1.5,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            figure_background: skia::Color::from_rgb(18, 18, 20),
            panel_background: skia::Color::from_rgb(28, 28, 32),
            grid_on: true,
            grid: skia::Color::from_rgb(40, 40, 45),
            grid_width: 0.8,
            spine: Some(skia::Color::from_rgb(180, 180, 190)),
            spine_width: 0.8,
            text: skia::Color::from_rgb(235, 235, 245),
            axis_label: skia::Color::from_rgb(235, 235, 245),
            tick_label: skia::Color::from_rgb(150, 150, 160),
            tick_mark: Some(skia::Color::from_rgb(150, 150, 160)),
            bar_edge: None,
            legend_face: skia::Color::from_rgb(28, 28, 32),
            legend_edge: skia::Color::from_rgb(90, 90, 100),
            legend_alpha: 0.8,
            font_size: 10.0,
            tick_size: 10.0,
            label_size: 10.0,
            title_size: 12.0,
            legend_size: 10.0,
            line_width: 1.5,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::seaborn_darkgrid(),
        Theme::ggplot(),
        Theme::classic(),
        Theme::dark(),
    ]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> ChartResult<Theme> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::UnknownTheme(name.to_string()))
}

/// Use `preferred` if it exists, otherwise `fallback`. A missing fallback is an error.
pub fn select(preferred: &str, fallback: &str) -> ChartResult<Theme> {
    match find(preferred) {
        Ok(theme) => {
            debug!(theme = theme.name, "theme selected");
            Ok(theme)
        }
        Err(err) => {
            warn!(%err, fallback, "preferred theme unavailable, falling back");
            find(fallback)
        }
    }
}
