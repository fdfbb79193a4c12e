// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the figure/panel API and rendering.

pub mod annotation;
pub mod axis;
pub mod chart;
pub mod crop;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use annotation::{Annotation, TextBox};
pub use axis::{Axis, TickMode};
pub use chart::{Chart, TwinAxis};
pub use error::{ChartError, ChartResult};
pub use figure::{encode_png, save_png, Figure, RenderOptions};
pub use legend::{Legend, LegendEntry, LegendLocation, Swatch};
pub use series::{LineStyle, Marker, Series, SeriesType};
pub use text::{FontWeight, HAlign, TextShaper, TextSpec, VAlign};
pub use theme::Theme;

pub use skia_safe::Color;
pub use image::RgbaImage;
