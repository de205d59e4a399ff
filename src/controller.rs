//! Selection state machine translating pointer/keyboard signals into overlay
//! updates.
//!
//! State per figure: either no selection (idle) or exactly one axis holding
//! the current [`Hit`]. Clicks move the selection between axes; arrow keys
//! walk the active series; Escape/Delete clears. All failures at interaction
//! time are silent no-ops — there is no sensible recovery visible to an
//! interactive user beyond "nothing happens".

use crate::data::AxisData;
use crate::error::AnnotateError;
use crate::figure::AxisId;
use crate::index::{AxisBounds, Hit, PointIndex};

/// Arrow-key navigation direction along a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the previous point index.
    Previous,
    /// Toward the next point index.
    Next,
}

/// The current selection: which axis is active and what was resolved there.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub axis: AxisId,
    pub hit: Hit,
}

/// Per-figure interaction state. At most one axis is selected at a time.
#[derive(Debug, Default)]
pub struct InteractionController {
    selection: Option<Selection>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Handle a click inside a registered axis's plotting area.
    ///
    /// Replaces the current selection with the nearest-item resolution for
    /// the click. An empty axis leaves the existing selection untouched.
    /// Returns whether the selection changed.
    pub fn click(
        &mut self,
        axis: AxisId,
        data: &AxisData,
        pos: [f64; 2],
        bounds: AxisBounds,
    ) -> bool {
        match PointIndex::new(data).query(pos[0], pos[1], bounds) {
            Ok(hit) => {
                self.selection = Some(Selection { axis, hit });
                true
            }
            Err(AnnotateError::EmptyAxis) => {
                log::debug!("click on axis {} ignored: nothing to annotate", axis);
                false
            }
            Err(err) => {
                log::warn!("click on axis {} failed: {}", axis, err);
                false
            }
        }
    }

    /// Handle a click outside any registered axis: the previous selection
    /// goes idle.
    pub fn click_outside(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Advance or retreat the selection along the active series.
    ///
    /// A no-op unless `axis` is the selected axis and its kind is a
    /// series-set; the index clamps at the first and last point of the
    /// currently selected series rather than wrapping. Returns whether the
    /// selection changed.
    pub fn key(&mut self, axis: AxisId, data: &AxisData, direction: Direction) -> bool {
        let Some(selection) = self.selection.as_mut() else {
            return false;
        };
        if selection.axis != axis {
            return false;
        }
        // Arrow navigation is defined only for series-sets.
        let (series, index) = match &selection.hit {
            Hit::Point { series, index, .. } => (*series, *index),
            _ => return false,
        };
        let AxisData::Series(all) = data else {
            return false;
        };
        let Some(active) = all.get(series) else {
            return false;
        };
        let last = active.len().saturating_sub(1);
        let next = match direction {
            Direction::Previous => index.saturating_sub(1),
            Direction::Next => (index + 1).min(last),
        };
        if next == index {
            return false;
        }
        let p = active.points()[next];
        selection.hit = Hit::Point {
            series,
            index: next,
            x: p[0],
            y: p[1],
            annotation: active.annotation(next).map(str::to_string),
        };
        true
    }

    /// Clear the selection for one axis (Escape/Delete). No-op when another
    /// axis is selected.
    pub fn clear(&mut self, axis: AxisId) -> bool {
        if self.selection.as_ref().is_some_and(|s| s.axis == axis) {
            self.selection = None;
            true
        } else {
            false
        }
    }

    /// Explicit teardown back to idle. Idempotent.
    pub fn reset(&mut self) {
        self.selection = None;
    }
}
