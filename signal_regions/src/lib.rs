// THEORY:
// This file is the main entry point for the `signal_regions` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the `region_tester` binary).
//
// The primary goal is to export `find_regions` and the `RegionPipeline` (with its
// `PipelineConfig` and `Report`) as the clean, high-level interface for the whole
// engine. The individual stages live in `core_modules` and remain reachable for
// callers that want to drive a single stage by hand.

pub mod core_modules;
pub mod pipeline;
pub mod presentation;
pub mod samples;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::core_modules::cell::SignalValue;
pub use crate::core_modules::centroid::CentroidError;
pub use crate::core_modules::grid::{GridError, GridShape};
pub use crate::core_modules::region_finder::region_finder::{find_regions, try_find_regions};
pub use crate::core_modules::smart_region::{Centroid, Point, Region};
