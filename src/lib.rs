//! Annoplot crate root: re-exports and module wiring.
//!
//! A thin interaction layer over egui/egui_plot adding click-to-inspect
//! point annotation and arrow-key navigation to rendered charts:
//! - `data`: chart data captured for lookup (series, grids, category groups)
//! - `index`: nearest-item resolution for a click coordinate
//! - `controller`: per-figure selection state machine
//! - `overlay`: the annotation marker and text box
//! - `figure`: per-figure axis registry, the registration entry point
//! - `ui`: egui wiring of clicks and keys onto the controller
//! - `app`: eframe run helper for standalone windows

pub mod app;
pub mod controller;
pub mod data;
pub mod error;
pub mod figure;
pub mod index;
pub mod overlay;
pub mod ui;

// Public re-exports for a compact external API
pub use app::{run_figure, run_figure_with_options};
pub use controller::{Direction, InteractionController, Selection};
pub use data::{AxisData, CategoryGroup, ChartKind, Grid, GroupStats, Series};
pub use error::AnnotateError;
pub use figure::{AxisId, FigureAnnotator};
pub use index::{AxisBounds, Hit, PointIndex};
pub use overlay::{OverlayStyle, OverlayStyleSerde};
pub use ui::FigureView;
