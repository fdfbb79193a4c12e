// File: crates/chart-core/src/error.rs
// Summary: Error type shared by theme lookup, figure layout and rendering.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("panel slot ({row}, {col}) outside {rows}x{cols} grid")]
    InvalidSlot { row: usize, col: usize, rows: usize, cols: usize },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
