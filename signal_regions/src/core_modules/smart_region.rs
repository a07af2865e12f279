// THEORY:
// The `smart_region` module holds the data containers produced by the region finder.
// A `Region` represents a single, contiguous patch of "hot" cells in one grid scan.
//
// Key architectural principles:
// 1.  **Spatial Cohesion**: A `Region` is a collection of grid cells that both exceed
//     the threshold and touch each other (including diagonally). It turns a noisy
//     signal map into a short list of meaningful shapes.
// 2.  **Data Aggregation**: Instead of dealing with every hot cell individually, a
//     consumer works with one `Region` that has a point list, a bounding box, and a
//     value-weighted center of mass.
// 3.  **Stateless Data Container**: Like the rest of this module, `Region` is a "dumb"
//     container. It is built once at the end of an exploration and never changes.
// 4.  **Explicit Absence**: A region whose centroid cannot be computed still carries
//     its full point list. The missing centroid is an explicit `None`, never a
//     dropped region.

use serde::Serialize;
use std::fmt;

/// A cell coordinate on the grid. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "(usize, usize)")]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (usize, usize) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The value-weighted mean position of a region, rounded to two decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One maximal 8-connected group of qualifying cells found during a single scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Discovery order within the scan that produced it. Not persistent.
    pub id: u64,
    /// Every cell in the region, in the order the explorer accepted them.
    pub points: Vec<Point>,
    /// Top-left and bottom-right corners of the box enclosing all points.
    pub bounding_box: (Point, Point),
    /// `None` when the weighted centroid is undefined for this region.
    pub center_of_mass: Option<Centroid>,
}

impl Region {
    pub(crate) fn new(id: u64, points: Vec<Point>, center_of_mass: Option<Centroid>) -> Self {
        let bounding_box = bounding_box(&points);
        Self {
            id,
            points,
            bounding_box,
            center_of_mass,
        }
    }

    /// The number of cells in the region, representing its area.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }
}

fn bounding_box(points: &[Point]) -> (Point, Point) {
    let Some(&first) = points.first() else {
        return (Point::new(0, 0), Point::new(0, 0));
    };
    points.iter().fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    })
}
