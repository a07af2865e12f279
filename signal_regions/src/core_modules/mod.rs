pub mod cell;
pub mod centroid;
pub mod grid;
pub mod neighbors;
pub mod region_explorer;
pub mod region_finder;
pub mod smart_region;
pub mod utils;
