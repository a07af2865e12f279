// THEORY:
// The `region_explorer` grows one region outward from a seed cell. It is the
// "region growing" half of connected-component extraction.
//
// Key architectural principles:
// 1.  **Explicit Stack**: Traversal is an iterative depth-first search over a `Vec`
//     used as a stack. Large connected regions never grow the call stack.
// 2.  **Visit On Pop**: A cell is marked visited when it is popped, not when it is
//     pushed. The same cell may therefore sit on the stack several times; the
//     re-pop guard skips every copy after the first.
// 3.  **Re-check On Pop**: Neighbors are pushed without being classified. Each
//     popped cell is classified again; a cold cell is marked visited and dropped
//     without expanding its neighbors.
// 4.  **Shared Visitation**: The `VisitedSet` belongs to the scan, not to the
//     explorer. It is borrowed mutably for the duration of one exploration so that a
//     cell consumed (or rejected) by one region is never looked at by another.

use crate::core_modules::cell::{self, SignalValue};
use crate::core_modules::grid::{self, GridShape};
use crate::core_modules::neighbors::neighbors;
use crate::core_modules::smart_region::Point;

/// The monotonic record of cells already resolved during one scan.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    shape: GridShape,
    mask: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            mask: vec![false; shape.area()],
            count: 0,
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn contains(&self, point: Point) -> bool {
        self.shape
            .index_of(point)
            .is_some_and(|index| self.mask[index])
    }

    /// Marks `point` visited. Returns `false` if it was already visited or lies
    /// outside the grid.
    pub fn insert(&mut self, point: Point) -> bool {
        let Some(index) = self.shape.index_of(point) else {
            return false;
        };
        if self.mask[index] {
            return false;
        }
        self.mask[index] = true;
        self.count += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Collects every qualifying cell 8-connected to `start`, in pop order.
///
/// `visited` must have been created for this grid's shape. Returns an empty list
/// if `start` was already visited or does not qualify.
pub fn explore<T: SignalValue>(
    grid: &[Vec<T>],
    start: Point,
    threshold: f64,
    visited: &mut VisitedSet,
) -> Vec<Point> {
    let shape = visited.shape();
    let mut stack: Vec<Point> = vec![start];
    let mut points: Vec<Point> = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        let hot = grid::cell_at(grid, current).is_some_and(|value| cell::qualifies(value, threshold));
        if !hot {
            continue;
        }

        points.push(current);
        stack.extend(
            neighbors(current.x, current.y, shape.width, shape.height)
                .filter(|neighbor| !visited.contains(*neighbor)),
        );
    }

    points
}
