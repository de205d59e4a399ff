//! Nearest-item resolution for one axis (the point index).
//!
//! A pure query layer: given a data-space coordinate and the data registered
//! on the axis under the cursor, resolve the single nearest addressable item.
//! Search is a linear scan; plots are bounded by rendered data volume, so no
//! spatial index is warranted.

use crate::data::{AxisData, GroupStats};
use crate::error::AnnotateError;

/// Visible data-space bounds of one axis.
///
/// Distances are scaled by the visible ranges so that screen-proximate points
/// win regardless of axis units; the overlay also uses the bounds to place
/// its text box away from the plot edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Visible x extent, falling back to 1 for degenerate bounds so distance
    /// scaling stays finite.
    pub fn width(&self) -> f64 {
        let w = self.x_max - self.x_min;
        if w.is_finite() && w > 0.0 {
            w
        } else {
            1.0
        }
    }

    pub fn height(&self) -> f64 {
        let h = self.y_max - self.y_min;
        if h.is_finite() && h > 0.0 {
            h
        } else {
            1.0
        }
    }
}

/// The resolved item under a query coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    /// Nearest point of a series-set axis.
    Point {
        series: usize,
        index: usize,
        x: f64,
        y: f64,
        annotation: Option<String>,
    },
    /// Nearest cell of a grid axis.
    Cell { row: usize, col: usize, value: f64 },
    /// Enclosing group of a category axis.
    Group {
        index: usize,
        label: String,
        anchor: [f64; 2],
        stats: GroupStats,
    },
}

impl Hit {
    /// Data-space position the overlay marker is drawn at.
    pub fn marker_position(&self) -> [f64; 2] {
        match self {
            Hit::Point { x, y, .. } => [*x, *y],
            Hit::Cell { row, col, .. } => [*col as f64, *row as f64],
            Hit::Group { anchor, .. } => *anchor,
        }
    }
}

/// Read-only nearest-item lookup over one axis's registered data.
pub struct PointIndex<'a> {
    data: &'a AxisData,
}

impl<'a> PointIndex<'a> {
    pub fn new(data: &'a AxisData) -> Self {
        Self { data }
    }

    /// Resolve a data-space coordinate to the nearest item.
    ///
    /// Fails with [`AnnotateError::EmptyAxis`] when there is nothing to
    /// resolve against. No side effects.
    pub fn query(&self, x: f64, y: f64, bounds: AxisBounds) -> Result<Hit, AnnotateError> {
        if self.data.is_empty() {
            return Err(AnnotateError::EmptyAxis);
        }
        match self.data {
            AxisData::Series(series) => {
                let xr = bounds.width();
                let yr = bounds.height();
                let mut best: Option<Hit> = None;
                let mut best_d2 = f64::INFINITY;
                for (si, s) in series.iter().enumerate() {
                    for (pi, p) in s.points().iter().enumerate() {
                        let dx = (p[0] - x) / xr;
                        let dy = (p[1] - y) / yr;
                        let d2 = dx * dx + dy * dy;
                        // Strict comparison keeps the first series, then the
                        // first point, on equidistant candidates.
                        if d2 < best_d2 {
                            best_d2 = d2;
                            best = Some(Hit::Point {
                                series: si,
                                index: pi,
                                x: p[0],
                                y: p[1],
                                annotation: s.annotation(pi).map(str::to_string),
                            });
                        }
                    }
                }
                best.ok_or(AnnotateError::EmptyAxis)
            }
            AxisData::Grid(grid) => {
                let (row, col) = grid.nearest_cell(x, y);
                Ok(Hit::Cell {
                    row,
                    col,
                    value: grid.value(row, col),
                })
            }
            AxisData::Categories(groups) => {
                let last = groups.len() - 1;
                groups
                    .iter()
                    .enumerate()
                    .find(|(i, g)| g.contains(x, *i == last))
                    .map(|(i, g)| Hit::Group {
                        index: i,
                        label: g.label().to_string(),
                        anchor: g.anchor(),
                        stats: g.stats().clone(),
                    })
                    .ok_or(AnnotateError::EmptyAxis)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CategoryGroup, Grid, Series};

    fn unit_bounds() -> AxisBounds {
        AxisBounds::new(0.0, 10.0, 0.0, 10.0)
    }

    #[test]
    fn exact_coordinate_returns_that_point() {
        let data = AxisData::Series(vec![Series::with_annotations(
            "s",
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]],
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap()]);
        let hit = PointIndex::new(&data).query(2.0, 4.0, unit_bounds()).unwrap();
        assert_eq!(
            hit,
            Hit::Point {
                series: 0,
                index: 2,
                x: 2.0,
                y: 4.0,
                annotation: Some("c".into()),
            }
        );
    }

    #[test]
    fn nearest_point_with_annotation() {
        let data = AxisData::Series(vec![Series::with_annotations(
            "s",
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]],
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap()]);
        let hit = PointIndex::new(&data).query(1.1, 1.1, unit_bounds()).unwrap();
        match hit {
            Hit::Point {
                series,
                index,
                annotation,
                ..
            } => {
                assert_eq!(series, 0);
                assert_eq!(index, 1);
                assert_eq!(annotation.as_deref(), Some("b"));
            }
            other => panic!("expected point hit, got {:?}", other),
        }
    }

    #[test]
    fn equidistant_points_break_ties_by_registration_order() {
        // Series A point at x=1, series B point at x=3; query at x=2 is
        // equidistant. A was registered first and must win.
        let a = Series::new("a", vec![[1.0, 0.0], [5.0, 5.0], [6.0, 6.0]]);
        let b = Series::new(
            "b",
            vec![[3.0, 0.0], [7.0, 7.0], [8.0, 8.0], [9.0, 9.0], [9.5, 9.5]],
        );
        let data = AxisData::Series(vec![a, b]);
        let index = PointIndex::new(&data);
        let hit = index.query(2.0, 0.0, unit_bounds()).unwrap();
        match &hit {
            Hit::Point { series, index, .. } => {
                assert_eq!(*series, 0);
                assert_eq!(*index, 0);
            }
            other => panic!("expected point hit, got {:?}", other),
        }
        // Deterministic on repeat.
        assert_eq!(index.query(2.0, 0.0, unit_bounds()).unwrap(), hit);
    }

    #[test]
    fn distance_is_scaled_by_visible_ranges() {
        // With y spanning 1000 units, a 5-unit y offset is visually closer
        // than a 2-unit x offset on a 10-unit x axis.
        let data = AxisData::Series(vec![Series::new(
            "s",
            vec![[2.0, 500.0], [0.0, 505.0]],
        )]);
        let bounds = AxisBounds::new(0.0, 10.0, 0.0, 1000.0);
        let hit = PointIndex::new(&data).query(0.0, 500.0, bounds).unwrap();
        match hit {
            Hit::Point { index, .. } => assert_eq!(index, 1),
            other => panic!("expected point hit, got {:?}", other),
        }
    }

    #[test]
    fn empty_axis_is_an_error() {
        let data = AxisData::Series(vec![Series::new("s", vec![])]);
        assert_eq!(
            PointIndex::new(&data).query(0.0, 0.0, unit_bounds()),
            Err(AnnotateError::EmptyAxis)
        );
    }

    #[test]
    fn grid_query_rounds_and_clamps() {
        let data = AxisData::Grid(Grid::new(5, 5, (0..25).map(|v| v as f64).collect()).unwrap());
        let index = PointIndex::new(&data);
        let hit = index.query(2.6, 3.4, unit_bounds()).unwrap();
        assert_eq!(
            hit,
            Hit::Cell {
                row: 3,
                col: 3,
                value: 18.0,
            }
        );
        match index.query(40.0, -2.0, unit_bounds()).unwrap() {
            Hit::Cell { row, col, .. } => {
                assert_eq!((row, col), (0, 4));
            }
            other => panic!("expected cell hit, got {:?}", other),
        }
    }

    #[test]
    fn category_query_resolves_by_containment() {
        let data = AxisData::Categories(CategoryGroup::histogram(&[0.0, 0.5, 1.0, 1.5, 2.0], 2));
        let index = PointIndex::new(&data);
        match index.query(0.25, 99.0, unit_bounds()).unwrap() {
            Hit::Group { index, stats, .. } => {
                assert_eq!(index, 0);
                assert_eq!(stats.count, 2);
            }
            other => panic!("expected group hit, got {:?}", other),
        }
        // A click on the final edge still hits the last bar.
        match index.query(2.0, 0.0, unit_bounds()).unwrap() {
            Hit::Group { index, .. } => assert_eq!(index, 1),
            other => panic!("expected group hit, got {:?}", other),
        }
        // Outside every bar resolves to nothing.
        assert_eq!(
            index.query(5.0, 0.0, unit_bounds()),
            Err(AnnotateError::EmptyAxis)
        );
    }
}
