//! Per-figure axis registry and the public registration entry point.
//!
//! A [`FigureAnnotator`] is created once per figure and keyed explicitly by
//! the caller; there is no ambient "current figure". Independent figures hold
//! independent annotator values, so a failed registration in one figure never
//! touches another.

use std::collections::BTreeMap;
use std::fmt;

use crate::controller::{Direction, InteractionController, Selection};
use crate::data::{AxisData, CategoryGroup, ChartKind, Grid, Series};
use crate::error::AnnotateError;
use crate::index::AxisBounds;
use crate::overlay::OverlayStyle;

/// Identity of one plotting region (subplot slot) within a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisId(pub usize);

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registered axis: its captured chart data plus an optional style
/// override.
#[derive(Debug, Clone)]
pub struct AxisEntry {
    pub data: AxisData,
    pub style: Option<OverlayStyle>,
}

/// Registry and interaction state for one figure.
#[derive(Debug, Default)]
pub struct FigureAnnotator {
    axes: BTreeMap<AxisId, AxisEntry>,
    controller: InteractionController,
    default_style: OverlayStyle,
}

impl FigureAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An annotator whose overlays use the given style unless an axis
    /// overrides it.
    pub fn with_style(style: OverlayStyle) -> Self {
        Self {
            default_style: style,
            ..Self::default()
        }
    }

    /// Register chart data on an axis.
    ///
    /// A series-set or category axis accepts further registrations of the
    /// same kind by appending; a grid registration replaces the previous
    /// grid. Registering a different kind on an occupied axis fails with
    /// [`AnnotateError::UnsupportedMixedKind`] and leaves the registry
    /// unchanged.
    pub fn register_axis(&mut self, axis: AxisId, data: AxisData) -> Result<(), AnnotateError> {
        match self.axes.get_mut(&axis) {
            None => {
                log::debug!("registered {} axis {}", data.kind(), axis);
                self.axes.insert(axis, AxisEntry { data, style: None });
                Ok(())
            }
            Some(entry) => {
                let existing = entry.data.kind();
                let requested = data.kind();
                if existing != requested {
                    return Err(AnnotateError::UnsupportedMixedKind {
                        axis,
                        existing,
                        requested,
                    });
                }
                match (&mut entry.data, data) {
                    (AxisData::Series(into), AxisData::Series(more)) => into.extend(more),
                    (AxisData::Categories(into), AxisData::Categories(more)) => into.extend(more),
                    (AxisData::Grid(slot), AxisData::Grid(grid)) => *slot = grid,
                    _ => unreachable!("kinds verified equal above"),
                }
                Ok(())
            }
        }
    }

    /// Register one line series on an axis.
    pub fn register_series(&mut self, axis: AxisId, series: Series) -> Result<(), AnnotateError> {
        self.register_axis(axis, AxisData::Series(vec![series]))
    }

    /// Register an image-style grid on an axis.
    pub fn register_grid(&mut self, axis: AxisId, grid: Grid) -> Result<(), AnnotateError> {
        self.register_axis(axis, AxisData::Grid(grid))
    }

    /// Register boxplot or histogram groups on an axis.
    pub fn register_categories(
        &mut self,
        axis: AxisId,
        groups: Vec<CategoryGroup>,
    ) -> Result<(), AnnotateError> {
        self.register_axis(axis, AxisData::Categories(groups))
    }

    /// Override the overlay style for one registered axis.
    pub fn set_axis_style(&mut self, axis: AxisId, style: OverlayStyle) {
        if let Some(entry) = self.axes.get_mut(&axis) {
            entry.style = Some(style);
        }
    }

    pub fn set_default_style(&mut self, style: OverlayStyle) {
        self.default_style = style;
    }

    /// The style overlays on `axis` are drawn with.
    pub fn style_for(&self, axis: AxisId) -> &OverlayStyle {
        self.axes
            .get(&axis)
            .and_then(|e| e.style.as_ref())
            .unwrap_or(&self.default_style)
    }

    pub fn axis_ids(&self) -> Vec<AxisId> {
        self.axes.keys().copied().collect()
    }

    pub fn axis_data(&self, axis: AxisId) -> Option<&AxisData> {
        self.axes.get(&axis).map(|e| &e.data)
    }

    pub fn kind(&self, axis: AxisId) -> Option<ChartKind> {
        self.axes.get(&axis).map(|e| e.data.kind())
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.controller.selection()
    }

    /// A pointer click at a data-space coordinate. `None` means the click
    /// landed outside every registered axis, which idles the previous
    /// selection; a click on an unregistered or empty axis is a no-op.
    pub fn on_click(&mut self, axis: Option<AxisId>, pos: [f64; 2], bounds: AxisBounds) -> bool {
        match axis {
            Some(axis) => match self.axes.get(&axis) {
                Some(entry) => self.controller.click(axis, &entry.data, pos, bounds),
                None => false,
            },
            None => self.controller.click_outside(),
        }
    }

    /// An arrow key pressed while the cursor is inside `axis`.
    pub fn on_key(&mut self, axis: AxisId, direction: Direction) -> bool {
        match self.axes.get(&axis) {
            Some(entry) => self.controller.key(axis, &entry.data, direction),
            None => false,
        }
    }

    /// Escape/Delete pressed while the cursor is inside `axis`.
    pub fn on_clear(&mut self, axis: AxisId) -> bool {
        self.controller.clear(axis)
    }

    /// Explicit teardown of all overlay state for this figure. Idempotent.
    pub fn reset(&mut self) {
        self.controller.reset();
    }
}
