// Image I/O at the edge of the engine: decoding pictures into signal grids and
// writing a PNG overlay that shows where the regions were found.

pub mod image_helper {
    use crate::core_modules::cell::{self, SignalValue};
    use crate::core_modules::grid;
    use crate::core_modules::smart_region::Region;
    use image::error::{ParameterError, ParameterErrorKind};
    use image::{DynamicImage, ImageEncoder, ImageError, Rgba, RgbaImage};
    use std::io::BufWriter;
    use std::path::Path;

    const REGION_TINT: u8 = 60;
    const CENTER_MARK: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const INVALID_CELL: Rgba<u8> = Rgba([0, 0, 96, 255]);

    /// Decodes the image at `path` and returns its 8-bit luma values as rows.
    pub fn load_luma_grid(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>, ImageError> {
        Ok(luma_grid(&image::open(path)?))
    }

    /// Converts any decoded image into 8-bit luma rows.
    pub fn luma_grid(image: &DynamicImage) -> Vec<Vec<u8>> {
        let luma = image.to_luma8();
        luma.rows()
            .map(|row| row.map(|pixel| pixel.0[0]).collect())
            .collect()
    }

    /// Paints one pixel per cell: grey for ordinary cells (scaled to the hottest
    /// valid value), red for region cells, white for the cell nearest each center
    /// of mass, dark blue for cells that hold no valid value.
    pub fn render_region_overlay<T: SignalValue>(
        grid: &[Vec<T>],
        regions: &[Region],
    ) -> Result<RgbaImage, ImageError> {
        let shape = grid::check(grid).map_err(|_| dimension_mismatch())?;
        let (width, height) = (
            u32::try_from(shape.width).map_err(|_| dimension_mismatch())?,
            u32::try_from(shape.height).map_err(|_| dimension_mismatch())?,
        );

        let peak = grid
            .iter()
            .flatten()
            .filter_map(|value| cell::valid_value(value))
            .fold(f64::MIN_POSITIVE, f64::max);

        let mut canvas = RgbaImage::new(width, height);
        for (y, row) in grid.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                let pixel = match cell::valid_value(value) {
                    Some(v) => {
                        let level = (v.max(0.0) / peak * 255.0).round().clamp(0.0, 255.0) as u8;
                        Rgba([level, level, level, 255])
                    }
                    None => INVALID_CELL,
                };
                canvas.put_pixel(x as u32, y as u32, pixel);
            }
        }

        for region in regions {
            for point in &region.points {
                if let Some(pixel) = canvas.get_pixel_mut_checked(point.x as u32, point.y as u32) {
                    let level = pixel.0[0].max(REGION_TINT);
                    *pixel = Rgba([level, REGION_TINT, REGION_TINT, 255]);
                }
            }
            let marker = region.center_of_mass.and_then(|center| {
                Some((on_canvas(center.x, width)?, on_canvas(center.y, height)?))
            });
            if let Some((cx, cy)) = marker {
                canvas.put_pixel(cx, cy, CENTER_MARK);
            }
        }

        Ok(canvas)
    }

    /// Writes the region overlay for `grid` to `path` as a PNG.
    pub fn save_region_overlay<T: SignalValue>(
        path: impl AsRef<Path>,
        grid: &[Vec<T>],
        regions: &[Region],
    ) -> Result<(), ImageError> {
        let canvas = render_region_overlay(grid, regions)?;
        let output = BufWriter::new(std::fs::File::create(path)?);
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgba8,
        )?;

        Ok(())
    }

    /// The pixel index nearest to `coordinate`, or `None` if that falls off the canvas.
    /// Negative weights can push a center of mass outside its own grid.
    fn on_canvas(coordinate: f64, extent: u32) -> Option<u32> {
        let nearest = coordinate.round();
        (0.0..f64::from(extent))
            .contains(&nearest)
            .then_some(nearest as u32)
    }

    fn dimension_mismatch() -> ImageError {
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
    }
}
