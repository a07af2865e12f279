// THEORY:
// The `centroid` module computes a region's center of mass, weighting every point
// by its signal strength so that the result leans toward the hottest cells. This is
// the physical weighted mean: x = Σ(x·v) / Σv, y = Σ(y·v) / Σv.
//
// The computation can fail (a point whose cell is no longer a finite number, or a
// total weight that is zero or non-finite). Those failures are returned as a
// `CentroidError` value instead of aborting; the region finder decides what to do
// with them.
//
// Coordinates are rounded to two decimal places. The rounding looks at the exact
// binary value of the mean: 0.575 is stored as 0.57499999999999995559 and rounds
// down, while a true tie such as 0.125 rounds away from zero.

use crate::core_modules::cell::{self, SignalValue};
use crate::core_modules::grid;
use crate::core_modules::smart_region::{Centroid, Point};
use thiserror::Error;

/// Reasons a weighted centroid cannot be produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CentroidError {
    /// A point's cell is absent, NaN or infinite.
    #[error("cell {point} does not hold a finite value")]
    InvalidCell { point: Point },

    /// A point lies outside the grid.
    #[error("point {point} lies outside the grid")]
    OutOfBounds { point: Point },

    /// The sum of all weights is zero or not finite.
    #[error("total weight {total} cannot normalise a center of mass")]
    DegenerateWeight { total: f64 },
}

/// Value-weighted centroid of `points`, each coordinate rounded to hundredths.
pub fn centroid<T: SignalValue>(points: &[Point], grid: &[Vec<T>]) -> Result<Centroid, CentroidError> {
    let mut total_weight = 0.0;
    let mut weighted_sum_x = 0.0;
    let mut weighted_sum_y = 0.0;

    for &point in points {
        let cell = grid::cell_at(grid, point).ok_or(CentroidError::OutOfBounds { point })?;
        let value = cell::valid_value(cell).ok_or(CentroidError::InvalidCell { point })?;

        total_weight += value;
        weighted_sum_x += point.x as f64 * value;
        weighted_sum_y += point.y as f64 * value;
    }

    if !total_weight.is_finite() || total_weight == 0.0 {
        return Err(CentroidError::DegenerateWeight {
            total: total_weight,
        });
    }

    Ok(Centroid {
        x: round_to_hundredths(weighted_sum_x / total_weight),
        y: round_to_hundredths(weighted_sum_y / total_weight),
    })
}

/// Rounds the exact value of `value` to two decimal places, ties away from zero.
/// Never returns negative zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    let magnitude = value.abs();
    let scaled = magnitude * 100.0;
    // Past 2^52 every f64 is an integer, so there is nothing left to round.
    if !scaled.is_finite() || scaled >= TWO_POW_52 {
        return value;
    }

    // `scaled + residual` is exactly `magnitude * 100`.
    let residual = magnitude.mul_add(100.0, -scaled);
    let floor = scaled.floor();
    let above_midpoint = (scaled - floor - 0.5) + residual >= 0.0;
    let hundredths = if above_midpoint { floor + 1.0 } else { floor };

    (hundredths / 100.0).copysign(value) + 0.0
}

const TWO_POW_52: f64 = 4_503_599_627_370_496.0;
