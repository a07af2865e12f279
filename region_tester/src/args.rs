use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Find hot regions in a signal grid and report their centers of mass")]
pub struct Args {
    /// JSON grid: an array of equally long arrays of numbers or null.
    #[arg(long, value_name = "PATH", conflicts_with = "image")]
    pub grid: Option<PathBuf>,

    /// Image whose 8-bit luma values form the grid.
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// A cell qualifies when its value is strictly greater than this.
    #[arg(long, default_value_t = signal_regions::samples::DEMO_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Fail on ragged grids instead of reporting no regions.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Drop regions with fewer cells than this.
    #[arg(long, value_name = "CELLS", default_value_t = 1)]
    pub min_region_size: usize,

    /// Print the report as JSON instead of the text listing.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write a PNG overlay of the regions to this path.
    #[arg(long, value_name = "PATH")]
    pub overlay: Option<PathBuf>,
}
