// ABOUTME: Flockfeed CLI - daily feed and water planning for small poultry flocks
// ABOUTME: Lists the species catalog and computes flock plans from JSON plan files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors
//!
//! Usage:
//! ```bash
//! # List built-in species and their diet phases
//! flockfeed catalog
//!
//! # List species of an external catalog
//! flockfeed catalog --catalog ./my-species.json
//!
//! # Compute a flock plan as JSON
//! flockfeed plan --input flock.json
//!
//! # Export the plan as CSV
//! flockfeed plan --input flock.json --format csv > plan.csv
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flockfeed::logging::LoggingConfig;
use flockfeed_engine::SpeciesCatalog;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "flockfeed",
    about = "Poultry feed and water planner",
    long_about = "Estimates daily feed and water for small-farm poultry flocks from species, diet phase, and environment."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// External species catalog (JSON array of species profiles)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List species and their diet phases
    Catalog,

    /// Compute the daily requirement of a flock
    Plan {
        /// Plan file with environment, birds, and inventory records
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// Plan output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full flock result as pretty JSON
    Json,
    /// Per species/phase feeding plan as CSV
    Csv,
}

fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, SpeciesCatalog>> {
    match path {
        Some(path) => {
            let catalog = SpeciesCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load species catalog {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(SpeciesCatalog::builtin())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let catalog = load_catalog(cli.catalog.as_deref())?;
    debug!(species = catalog.len(), "Species catalog ready");

    match cli.command {
        Command::Catalog => {
            commands::catalog::list(&catalog);
            Ok(())
        }
        Command::Plan { input, format } => commands::plan::run(&catalog, &input, format),
    }
}
