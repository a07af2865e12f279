//! Command-line front end for `signal_regions`.
//!
//! Loads a grid (JSON file, image, or the built-in demo grid), runs the region
//! pipeline, and prints the regions either as the text listing or as JSON.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use signal_regions::core_modules::utils::image_helper::image_helper;
use signal_regions::pipeline::{PipelineConfig, RegionPipeline};
use signal_regions::presentation::render_regions;
use signal_regions::samples::demo_grid;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Grids are normalised to optional floats so every source takes the same path.
type Grid = Vec<Vec<Option<f64>>>;

fn main() -> Result<()> {
    init_tracing();

    // --- 1. Argument Parsing & Setup ---
    let args = Args::parse();
    let config = PipelineConfig {
        threshold: args.threshold,
        reject_malformed: args.strict,
        min_region_size: args.min_region_size,
    };

    // --- 2. Grid Loading ---
    let grid = load_grid(&args)?;

    // --- 3. Pipeline Processing ---
    let pipeline = RegionPipeline::new(config);
    let report = pipeline
        .process(&grid)
        .context("grid rejected in strict mode")?;
    tracing::info!(
        regions = report.regions.len(),
        unresolved = report.unresolved_count(),
        "scan finished"
    );

    // --- 4. Output ---
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else {
        print!("{}", render_regions(&report.regions));
    }

    if let Some(path) = &args.overlay {
        image_helper::save_region_overlay(path, &grid, &report.regions)
            .with_context(|| format!("failed to write overlay {}", path.display()))?;
        tracing::info!(path = %path.display(), "overlay saved");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_grid(args: &Args) -> Result<Grid> {
    if let Some(path) = &args.grid {
        return load_json_grid(path);
    }
    if let Some(path) = &args.image {
        let luma = image_helper::load_luma_grid(path)
            .with_context(|| format!("failed to read image {}", path.display()))?;
        return Ok(luma
            .into_iter()
            .map(|row| row.into_iter().map(|v| Some(f64::from(v))).collect())
            .collect());
    }
    tracing::debug!("no input given, using the demo grid");
    Ok(demo_grid()
        .into_iter()
        .map(|row| row.into_iter().map(Some).collect())
        .collect())
}

fn load_json_grid(path: &Path) -> Result<Grid> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read grid {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a JSON grid", path.display()))
}
