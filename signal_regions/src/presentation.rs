//! Plain-text rendering of scan results.
//!
//! Produces the region listing printed by the demo runner and `region_tester`:
//!
//! ```text
//!
//! Subregions of interest and their centers of mass:
//!
//! Region 1:
//! Coordinates: { (1,1) }
//! Center of Mass: (1, 1)
//! ```
//!
//! Numbers use the shortest `f64` form, so `1.0` prints as `1` and `4.5` as `4.5`.

use crate::core_modules::smart_region::{Centroid, Point, Region};

pub const HEADER: &str = "Subregions of interest and their centers of mass:";

pub fn format_point(point: Point) -> String {
    point.to_string()
}

pub fn format_points(points: &[Point]) -> String {
    let joined = points
        .iter()
        .map(|point| format_point(*point))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {joined} }}")
}

pub fn format_center_of_mass(center: Option<&Centroid>) -> String {
    match center {
        Some(center) => center.to_string(),
        None => "Could not be calculated".to_string(),
    }
}

/// Renders one region. `ordinal` is the 1-based position shown to the reader.
pub fn render_region(ordinal: usize, region: &Region) -> String {
    format!(
        "\nRegion {ordinal}:\nCoordinates: {}\nCenter of Mass: {}\n",
        format_points(&region.points),
        format_center_of_mass(region.center_of_mass.as_ref()),
    )
}

/// Renders the full listing, header included.
pub fn render_regions(regions: &[Region]) -> String {
    let mut out = format!("\n{HEADER}\n");
    for (index, region) in regions.iter().enumerate() {
        out.push_str(&render_region(index + 1, region));
    }
    out
}
