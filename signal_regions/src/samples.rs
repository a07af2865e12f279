//! The reference signal map shipped with the engine.
//!
//! Both the demo runner and `region_tester` fall back to this grid when no input
//! is given, which keeps their output comparable.

/// Threshold the reference grid is meant to be scanned with.
pub const DEMO_THRESHOLD: f64 = 200.0;

const DEMO_ROWS: [[f64; 6]; 6] = [
    [0.0, 80.0, 45.0, 95.0, 170.0, 145.0],
    [115.0, 210.0, 60.0, 5.0, 230.0, 220.0],
    [5.0, 0.0, 145.0, 250.0, 245.0, 140.0],
    [15.0, 5.0, 175.0, 250.0, 185.0, 160.0],
    [0.0, 5.0, 95.0, 115.0, 165.0, 250.0],
    [5.0, 0.0, 25.0, 5.0, 145.0, 250.0],
];

/// A 6x6 signal map with three hot regions above [`DEMO_THRESHOLD`].
pub fn demo_grid() -> Vec<Vec<f64>> {
    DEMO_ROWS.iter().map(|row| row.to_vec()).collect()
}
