// THEORY:
// The `pipeline` module is the top-level API for the engine. It wraps grid
// validation, region finding and post-filtering behind one configurable struct.
// Its purpose is to give callers a single entry point that takes a grid and returns
// a report, with the policy decisions (threshold, how to treat malformed grids,
// how small a region may be) gathered in `PipelineConfig`.

use crate::core_modules::cell::SignalValue;
use crate::core_modules::grid::{self, GridError, GridShape};
use crate::core_modules::region_finder::region_finder;
use crate::core_modules::smart_region::Region;
use crate::samples::DEMO_THRESHOLD;
use serde::Serialize;

/// Configuration for the RegionPipeline, allowing for tunable behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// A cell qualifies when its value is strictly greater than this.
    pub threshold: f64,
    /// When `true`, a ragged grid is returned as an error instead of an empty report.
    pub reject_malformed: bool,
    /// Regions with fewer cells than this are dropped from the report.
    pub min_region_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: DEMO_THRESHOLD,
            reject_malformed: false,
            min_region_size: 1,
        }
    }
}

/// The output of the pipeline for a single grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Shape of the scanned grid; `None` when the grid was empty or rejected.
    pub grid_shape: Option<GridShape>,
    pub regions: Vec<Region>,
}

impl Report {
    fn empty() -> Self {
        Self {
            grid_shape: None,
            regions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of regions whose center of mass could not be computed.
    pub fn unresolved_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|region| region.center_of_mass.is_none())
            .count()
    }
}

/// The main, top-level struct for the engine.
#[derive(Debug, Clone, Default)]
pub struct RegionPipeline {
    config: PipelineConfig,
}

impl RegionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn process<T: SignalValue>(&self, grid: &[Vec<T>]) -> Result<Report, GridError> {
        // Stage 1: Structural Validation
        let shape = match grid::check(grid) {
            Ok(shape) => shape,
            Err(GridError::Empty) => return Ok(Report::empty()),
            Err(error) if self.config.reject_malformed => return Err(error),
            Err(error) => {
                tracing::debug!(%error, "malformed grid, reporting no regions");
                return Ok(Report::empty());
            }
        };

        // Stage 2: Spatial Grouping
        let raw_regions = region_finder::scan(grid, shape, self.config.threshold);

        // Stage 3: Region Filtering
        let regions = self.filter_regions(raw_regions);

        Ok(Report {
            grid_shape: Some(shape),
            regions,
        })
    }

    fn filter_regions(&self, regions: Vec<Region>) -> Vec<Region> {
        let before = regions.len();
        let kept: Vec<Region> = regions
            .into_iter()
            .filter(|region| region.size() >= self.config.min_region_size)
            .collect();
        if kept.len() < before {
            tracing::debug!(
                dropped = before - kept.len(),
                min_region_size = self.config.min_region_size,
                "filtered small regions"
            );
        }
        kept
    }
}
