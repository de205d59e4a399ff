//! Chart data captured for annotation lookup.
//!
//! Each axis holds exactly one chart kind. The data here is a read-back of
//! what the host plot already renders; nothing is copied beyond what the
//! nearest-item search needs.

use std::fmt;

pub mod category;
pub mod grid;
pub mod series;

pub use category::{CategoryGroup, GroupShape, GroupStats};
pub use grid::Grid;
pub use series::Series;

/// The chart kind held by one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One or more plotted lines.
    Series,
    /// An image-style 2-D value grid.
    Grid,
    /// Boxplot boxes or histogram bars.
    Category,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartKind::Series => "series",
            ChartKind::Grid => "grid",
            ChartKind::Category => "category",
        };
        write!(f, "{}", s)
    }
}

/// Data registered on one axis: an explicit tagged variant rather than
/// dispatch on host-library object types. Mixing kinds on one axis is
/// rejected at registration time.
#[derive(Debug, Clone)]
pub enum AxisData {
    Series(Vec<Series>),
    Grid(Grid),
    Categories(Vec<CategoryGroup>),
}

impl AxisData {
    pub fn kind(&self) -> ChartKind {
        match self {
            AxisData::Series(_) => ChartKind::Series,
            AxisData::Grid(_) => ChartKind::Grid,
            AxisData::Categories(_) => ChartKind::Category,
        }
    }

    /// An axis with nothing to resolve a click against.
    pub fn is_empty(&self) -> bool {
        match self {
            AxisData::Series(series) => series.iter().all(|s| s.is_empty()),
            AxisData::Grid(grid) => grid.is_empty(),
            AxisData::Categories(groups) => groups.is_empty(),
        }
    }
}
