//! Error taxonomy for axis registration and point-index queries.
//!
//! Registration problems are raised synchronously to the caller configuring
//! annotation. Query-time problems (an empty axis) are reported to the
//! interaction layer, which turns them into no-ops.

use thiserror::Error;

use crate::data::ChartKind;
use crate::figure::AxisId;

/// Errors surfaced while registering axes or resolving a query coordinate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnnotateError {
    /// The axis holds no data to resolve a click against.
    #[error("axis has no data to annotate")]
    EmptyAxis,

    /// An axis was registered with a second, different chart kind.
    #[error("axis {axis} already holds {existing} data, cannot add {requested}")]
    UnsupportedMixedKind {
        axis: AxisId,
        existing: ChartKind,
        requested: ChartKind,
    },

    /// A per-series annotation list does not match the series point count.
    #[error("series '{series}' has {points} points but {annotations} annotations")]
    InvalidAnnotationShape {
        series: String,
        points: usize,
        annotations: usize,
    },

    /// A grid was constructed with a value buffer that does not match its
    /// declared dimensions.
    #[error("grid declared as {rows}x{cols} but {values} values were supplied")]
    InvalidGridShape {
        rows: usize,
        cols: usize,
        values: usize,
    },
}
