// ABOUTME: Main library entry point for the Flockfeed poultry ration planner
// ABOUTME: Re-exports the engine and adds logging, inventory mapping, plan files, and CSV reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

#![deny(unsafe_code)]

//! # Flockfeed
//!
//! Daily feed and water planning for small-farm poultry flocks.
//!
//! ## Architecture
//!
//! - **`flockfeed-core`**: Domain models, error taxonomy, husbandry constants
//! - **`flockfeed-engine`**: Species catalog, per-bird calculator, flock aggregator
//! - **This crate**: Application glue for the `flockfeed` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use flockfeed::plan::FlockPlanInput;
//! use flockfeed::report::to_csv_string;
//! use flockfeed::{ModelConstants, SpeciesCatalog};
//!
//! fn main() -> anyhow::Result<()> {
//!     let plan = FlockPlanInput::from_json_str(
//!         r#"{ "birds": [{ "species_id": "layer_hen" }, { "species_id": "rooster" }] }"#,
//!     )?;
//!     let result = plan.compute(SpeciesCatalog::builtin(), ModelConstants::global())?;
//!     println!("{}", to_csv_string(&result.groups)?);
//!     Ok(())
//! }
//! ```

/// Mapping of stored animal records onto calculator inputs
pub mod inventory;

/// Structured logging setup
pub mod logging;

/// Flock plan input documents
pub mod plan;

/// CSV feeding plan export
pub mod report;

pub use flockfeed_core::{
    Alert, BirdInput, BirdResult, DietPhase, EngineError, EngineResult, Environment, FlockResult,
    GroupSummary, SpeciesProfile,
};
pub use flockfeed_engine::{
    compute_bird_intake, compute_flock_intake, CatalogError, ConfigError, ModelConstants,
    SpeciesCatalog,
};
