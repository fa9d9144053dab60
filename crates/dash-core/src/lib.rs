// File: crates/dash-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building, laying out and exporting dashboards.

pub mod error;
pub mod types;
pub mod theme;
pub mod dataset;
pub mod format;
pub mod scale;
pub mod grid;
pub mod axis;
pub mod series;
pub mod chart;
pub mod style;
pub mod indicator;
pub mod downsample;
pub mod builders;
pub mod kpi;
pub mod layout;
pub mod render;
pub mod export;

pub use error::{DashError, Result};
pub use types::{Color, Insets};
pub use theme::{Role, Theme, ThemeOverrides};
pub use dataset::{Column, ColumnType, Dataset};
pub use axis::{Axis, ScaleKind, TickFormat};
pub use series::{Glyph, Series};
pub use chart::{Chart, ChartKind, Frame, Tool};
pub use style::apply_theme;
pub use indicator::{Indicator, MovingAverage};
pub use downsample::lttb;
pub use builders::ChartSpec;
pub use kpi::{summarize, KpiCard, KpiInputs, Trend};
pub use layout::{compose, Dashboard, Header};
pub use render::{render_html, render_svg};
pub use export::export;
