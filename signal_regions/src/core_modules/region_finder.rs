// THEORY:
// The `RegionFinder` is the engine of the spatial grouping stage. It scans a signal
// grid, identifies every maximal 8-connected patch of cells whose value is strictly
// above a threshold, and packages each patch as a `Region` with its weighted center
// of mass.
//
// Key architectural principles & algorithm steps:
// 1.  **Validation**: The grid's shape is checked exactly once, up front. A grid that
//     is empty or ragged produces no regions; `try_find_regions` is the variant that
//     reports a ragged grid as an error instead.
// 2.  **Row-Major Seeding**: Cells are scanned top row first, left to right. A cold
//     cell met by the scan is marked visited on the spot, so it is never seeded or
//     revisited. Cold cells are only marked when the scan (or an exploration)
//     reaches them, never upfront.
// 3.  **Region Growing**: Every hot, unvisited cell seeds an exploration that
//     consumes its whole connected component through the shared `VisitedSet`.
// 4.  **Per-Region Fault Isolation**: If a region's center of mass cannot be
//     computed, the region is still reported with `center_of_mass: None`. One bad
//     region never aborts the scan or loses its points.
// 5.  **Stateless Utility**: Like the rest of this stage, the finder keeps nothing
//     between calls. The visited set lives and dies inside one scan.

use crate::core_modules::cell::{self, SignalValue};
use crate::core_modules::centroid;
use crate::core_modules::grid::{self, GridError, GridShape};
use crate::core_modules::region_explorer::{self, VisitedSet};
use crate::core_modules::smart_region::{Point, Region};

pub mod region_finder {
    use super::*; // Make the stage modules from the parent available.

    /// The main function of the spatial grouping stage.
    /// Returns every region in `grid` whose cells exceed `threshold`, or an empty
    /// list if the grid is empty or ragged.
    pub fn find_regions<T: SignalValue>(grid: &[Vec<T>], threshold: f64) -> Vec<Region> {
        match grid::check(grid) {
            Ok(shape) => scan(grid, shape, threshold),
            Err(error) => {
                tracing::debug!(%error, "grid rejected, reporting no regions");
                Vec::new()
            }
        }
    }

    /// Like [`find_regions`], but a ragged grid is an error. An empty grid is still
    /// a valid input with no regions.
    pub fn try_find_regions<T: SignalValue>(
        grid: &[Vec<T>],
        threshold: f64,
    ) -> Result<Vec<Region>, GridError> {
        match grid::check(grid) {
            Ok(shape) => Ok(scan(grid, shape, threshold)),
            Err(GridError::Empty) => Ok(Vec::new()),
            Err(error) => Err(error),
        }
    }

    /// Scans a grid already known to have `shape`.
    pub(crate) fn scan<T: SignalValue>(grid: &[Vec<T>], shape: GridShape, threshold: f64) -> Vec<Region> {
        let mut visited = VisitedSet::new(shape);
        let mut regions: Vec<Region> = Vec::new();
        let mut region_id_counter = 0;

        for (y, row) in grid.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                let seed = Point::new(x, y);
                if visited.contains(seed) {
                    continue;
                }

                if !cell::qualifies(value, threshold) {
                    visited.insert(seed);
                    continue;
                }

                let points = region_explorer::explore(grid, seed, threshold, &mut visited);
                if points.is_empty() {
                    continue;
                }

                let center_of_mass = match centroid::centroid(&points, grid) {
                    Ok(center) => Some(center),
                    Err(error) => {
                        tracing::warn!(
                            region = region_id_counter,
                            size = points.len(),
                            %error,
                            "skipping center of mass calculation for region"
                        );
                        None
                    }
                };

                regions.push(Region::new(region_id_counter, points, center_of_mass));
                region_id_counter += 1;
            }
        }

        tracing::debug!(
            width = shape.width,
            height = shape.height,
            threshold,
            regions = regions.len(),
            "grid scan complete"
        );
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::region_finder::*;
    use super::*;
    use crate::core_modules::smart_region::Centroid;
    use crate::testing::init_tracing;
    use std::collections::HashSet;

    fn pts(points: &[(usize, usize)]) -> Vec<Point> {
        points.iter().copied().map(Point::from).collect()
    }

    fn as_set(points: &[Point]) -> HashSet<Point> {
        points.iter().copied().collect()
    }

    #[test]
    fn strict_boundary_excludes_cells_equal_to_threshold() {
        init_tracing();
        let grid = vec![vec![200.0, 201.0, 199.0], vec![198.0, 200.0, 202.0]];
        let regions = find_regions(&grid, 200.0);

        assert_eq!(regions.len(), 1);
        // Pinned exploration order.
        assert_eq!(regions[0].points, pts(&[(1, 0), (2, 1)]));
        assert_eq!(regions[0].center_of_mass, Some(Centroid { x: 1.5, y: 0.5 }));
    }

    #[test]
    fn lower_threshold_grows_the_same_grid_into_one_region() {
        let grid = vec![vec![200.0, 201.0, 199.0], vec![198.0, 200.0, 202.0]];

        let regions = find_regions(&grid, 199.0);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points, pts(&[(0, 0), (1, 1), (2, 1), (1, 0)]));
        assert_eq!(regions[0].center_of_mass, Some(Centroid { x: 1.0, y: 0.5 }));

        let regions = find_regions(&grid, 201.0);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points, pts(&[(2, 1)]));
        assert_eq!(regions[0].center_of_mass, Some(Centroid { x: 2.0, y: 1.0 }));
    }

    #[test]
    fn isolated_corners_form_four_regions() {
        let grid = vec![
            vec![250.0, 0.0, 250.0],
            vec![0.0, 0.0, 0.0],
            vec![250.0, 0.0, 250.0],
        ];
        let regions = find_regions(&grid, 200.0);

        assert_eq!(regions.len(), 4);
        let corners: Vec<Vec<Point>> = regions.iter().map(|r| r.points.clone()).collect();
        assert_eq!(
            corners,
            vec![pts(&[(0, 0)]), pts(&[(2, 0)]), pts(&[(0, 2)]), pts(&[(2, 2)])]
        );
        let ids: Vec<u64> = regions.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(regions[3].center_of_mass, Some(Centroid { x: 2.0, y: 2.0 }));
    }

    #[test]
    fn diagonal_bridge_merges_rows() {
        let grid = vec![
            vec![250.0, 250.0, 250.0],
            vec![0.0, 250.0, 0.0],
            vec![250.0, 250.0, 250.0],
        ];
        let regions = find_regions(&grid, 200.0);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].size(), 7);
        assert_eq!(
            as_set(&regions[0].points),
            as_set(&pts(&[(0, 0), (1, 0), (2, 0), (1, 1), (0, 2), (1, 2), (2, 2)]))
        );
        assert_eq!(regions[0].center_of_mass, Some(Centroid { x: 1.0, y: 1.0 }));
        assert_eq!(regions[0].bounding_box, (Point::new(0, 0), Point::new(2, 2)));
    }

    #[test]
    fn empty_grid_yields_no_regions() {
        let grid: Vec<Vec<f64>> = Vec::new();
        assert!(find_regions(&grid, 200.0).is_empty());
        assert_eq!(try_find_regions(&grid, 200.0), Ok(Vec::new()));
    }

    #[test]
    fn ragged_grid_yields_no_regions() {
        let grid = vec![vec![250.0], vec![250.0, 250.0]];
        assert!(find_regions(&grid, 200.0).is_empty());
    }

    #[test]
    fn strict_variant_reports_ragged_grid() {
        let grid = vec![vec![250.0], vec![250.0, 250.0]];
        assert_eq!(
            try_find_regions(&grid, 200.0),
            Err(GridError::Ragged {
                row: 1,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn single_hot_cell() {
        let grid = vec![vec![250.0]];
        let regions = find_regions(&grid, 200.0);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points, pts(&[(0, 0)]));
    }

    #[test]
    fn invalid_values_are_skipped_without_failing_the_scan() {
        let grid = vec![
            vec![Some(f64::NAN), Some(250.0), Some(f64::INFINITY)],
            vec![Some(250.0), None, Some(250.0)],
        ];
        let regions = find_regions(&grid, 200.0);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points, pts(&[(1, 0), (2, 1), (0, 1)]));
        assert_eq!(regions[0].center_of_mass, Some(Centroid { x: 1.0, y: 0.67 }));
    }

    #[test]
    fn degenerate_weight_keeps_region_with_null_centroid() {
        init_tracing();
        let grid = vec![vec![5.0, -5.0]];
        let regions = find_regions(&grid, -10.0);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points, pts(&[(0, 0), (1, 0)]));
        assert_eq!(regions[0].center_of_mass, None);
    }

    #[test]
    fn failed_centroid_does_not_stop_later_regions() {
        let grid = vec![vec![5.0, -5.0, -20.0, 7.0]];
        let regions = find_regions(&grid, -10.0);

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].center_of_mass, None);
        assert_eq!(regions[1].points, pts(&[(3, 0)]));
        assert_eq!(regions[1].center_of_mass, Some(Centroid { x: 3.0, y: 0.0 }));
    }

    #[test]
    fn regions_partition_exactly_the_qualifying_cells() {
        let grid = vec![
            vec![0.0, 80.0, 45.0, 95.0, 170.0, 145.0],
            vec![115.0, 210.0, 60.0, 5.0, 230.0, 220.0],
            vec![5.0, 0.0, 145.0, 250.0, 245.0, 140.0],
            vec![15.0, 5.0, 175.0, 250.0, 185.0, 160.0],
            vec![0.0, 5.0, 95.0, 115.0, 165.0, 250.0],
            vec![5.0, 0.0, 25.0, 5.0, 145.0, 250.0],
        ];

        for threshold in [0.0, 50.0, 100.0, 150.0, 200.0, 240.0, 250.0] {
            let regions = find_regions(&grid, threshold);

            let mut seen = HashSet::new();
            for region in &regions {
                assert!(!region.points.is_empty());
                for &point in &region.points {
                    assert!(seen.insert(point), "{point} appears in two regions");
                }
            }

            let expected: HashSet<Point> = grid
                .iter()
                .enumerate()
                .flat_map(|(y, row)| {
                    row.iter()
                        .enumerate()
                        .filter(|(_, v)| **v > threshold)
                        .map(move |(x, _)| Point::new(x, y))
                })
                .collect();
            assert_eq!(seen, expected, "threshold {threshold}");
        }
    }

    #[test]
    fn repeated_scans_agree() {
        let grid = vec![
            vec![250.0, 0.0, 250.0, 250.0],
            vec![0.0, 250.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 250.0],
        ];
        assert_eq!(find_regions(&grid, 200.0), find_regions(&grid, 200.0));
    }

    #[test]
    fn integer_grids_are_accepted() {
        let grid: Vec<Vec<u8>> = vec![vec![0, 255], vec![255, 0]];
        let regions = find_regions(&grid, 128.0);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].center_of_mass, Some(Centroid { x: 0.5, y: 0.5 }));
    }
}
