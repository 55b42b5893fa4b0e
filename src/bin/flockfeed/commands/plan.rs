// ABOUTME: Flock planning command for the flockfeed CLI
// ABOUTME: Reads a plan file, runs the aggregator, and prints JSON or CSV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use anyhow::{Context, Result};
use flockfeed::plan::FlockPlanInput;
use flockfeed::report::write_csv;
use flockfeed_engine::{ModelConstants, SpeciesCatalog};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

use crate::OutputFormat;

/// Compute and print the plan stored at `input`
pub fn run(catalog: &SpeciesCatalog, input: &Path, format: OutputFormat) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read plan file {}", input.display()))?;
    let plan = FlockPlanInput::from_json_str(&json)
        .with_context(|| format!("Invalid plan file {}", input.display()))?;

    let result = plan
        .compute(catalog, ModelConstants::global())
        .with_context(|| format!("Failed to compute plan {}", input.display()))?;

    info!(
        birds = result.birds.len(),
        feed_g = result.total_final_feed_g,
        water_l = result.total_water_l,
        "Plan computed"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Csv => {
            write_csv(&result.groups, io::stdout().lock())?;
        }
    }
    Ok(())
}
