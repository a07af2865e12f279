// This file is an example of how to use the `signal_regions` library.
// The main library entry point is `src/lib.rs`; `region_tester` is the full CLI.

use signal_regions::presentation::render_regions;
use signal_regions::samples::{DEMO_THRESHOLD, demo_grid};

fn main() {
    let regions = signal_regions::find_regions(&demo_grid(), DEMO_THRESHOLD);
    print!("{}", render_regions(&regions));
}
