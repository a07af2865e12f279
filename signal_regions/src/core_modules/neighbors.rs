//! In-bounds 8-connected neighbors of a grid cell.

use crate::core_modules::smart_region::Point;

/*
    (-1,-1) (-1,0) (-1,1)
          \   |   /
    (0,-1) -- c -- (0,1)
          /   |   \
    (1,-1)  (1,0)  (1,1)
*/
/// Offsets as `(dx, dy)`, in the fixed order neighbors are produced.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbors of `(x, y)` that fall inside `[0, width) x [0, height)`.
pub fn neighbors(x: usize, y: usize, width: usize, height: usize) -> impl Iterator<Item = Point> {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some(Point::new(nx, ny))
    })
}
