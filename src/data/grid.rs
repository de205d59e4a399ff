//! Grid: a row-major 2-D value array backing an image-style chart.

use crate::error::AnnotateError;

/// A 2-D scalar grid queried by nearest integer cell, clamped to bounds.
///
/// Data-space convention follows image charts: x maps to the column index,
/// y maps to the row index.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Build a grid from a row-major value buffer.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, AnnotateError> {
        if values.len() != rows * cols {
            return Err(AnnotateError::InvalidGridShape {
                rows,
                cols,
                values: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a cell. Panics on out-of-range indices; use
    /// [`nearest_cell`](Self::nearest_cell) to derive in-range indices from a
    /// data-space coordinate.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Minimum and maximum cell values, for color ramps.
    pub fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.values {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
        (lo, hi)
    }

    /// Map a data-space coordinate to the nearest cell by rounding, clamped
    /// to the grid bounds. Returns `(row, col)`.
    pub fn nearest_cell(&self, x: f64, y: f64) -> (usize, usize) {
        let clamp = |v: f64, n: usize| -> usize {
            let r = v.round();
            if r <= 0.0 {
                0
            } else if r as usize >= n {
                n.saturating_sub(1)
            } else {
                r as usize
            }
        };
        (clamp(y, self.rows), clamp(x, self.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_5x5() -> Grid {
        Grid::new(5, 5, (0..25).map(|v| v as f64).collect()).unwrap()
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = Grid::new(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            AnnotateError::InvalidGridShape {
                rows: 2,
                cols: 3,
                values: 5,
            }
        );
    }

    #[test]
    fn nearest_cell_rounds() {
        let g = grid_5x5();
        assert_eq!(g.nearest_cell(2.6, 3.4), (3, 3));
        assert_eq!(g.nearest_cell(0.4, 0.4), (0, 0));
    }

    #[test]
    fn nearest_cell_clamps_to_bounds() {
        let g = grid_5x5();
        assert_eq!(g.nearest_cell(-3.0, -1.0), (0, 0));
        assert_eq!(g.nearest_cell(12.0, 9.7), (4, 4));
    }

    #[test]
    fn row_major_value_lookup() {
        let g = grid_5x5();
        assert_eq!(g.value(3, 3), 18.0);
        assert_eq!(g.value(0, 4), 4.0);
    }
}
