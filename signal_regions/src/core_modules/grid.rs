// THEORY:
// The `grid` module is the structural gatekeeper. Before any cell is classified the
// whole grid is checked once for shape: it must have at least one row, and every row
// must be as wide as the first. Cell contents are not inspected here; a grid full of
// NaNs is structurally fine and simply produces no regions later on.
//
// `check` reports *why* a grid was rejected, while `validate` collapses that into the
// plain yes/no answer the permissive scan needs.

use crate::core_modules::smart_region::Point;
use serde::Serialize;
use thiserror::Error;

/// Dimensions of a rectangular grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
}

impl GridShape {
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of `point`, or `None` if it lies outside the grid.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.contains(point).then(|| point.y * self.width + point.x)
    }
}

/// Structural problems that make a grid unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GridError {
    /// The grid has no rows at all.
    #[error("grid has no rows")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the first offending row.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// Checks that `grid` is non-empty and rectangular and returns its shape.
pub fn check<T>(grid: &[Vec<T>]) -> Result<GridShape, GridError> {
    let first = grid.first().ok_or(GridError::Empty)?;
    let width = first.len();

    if let Some((row, cells)) = grid
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != width)
    {
        return Err(GridError::Ragged {
            row,
            expected: width,
            found: cells.len(),
        });
    }

    Ok(GridShape {
        width,
        height: grid.len(),
    })
}

/// `true` when the grid is non-empty and every row has the same length.
pub fn validate<T>(grid: &[Vec<T>]) -> bool {
    check(grid).is_ok()
}

/// The cell at `point`, if it exists.
pub fn cell_at<T>(grid: &[Vec<T>], point: Point) -> Option<&T> {
    grid.get(point.y).and_then(|row| row.get(point.x))
}
