// ABOUTME: Ration algorithms for the Flockfeed poultry nutrition engine
// ABOUTME: Species catalog, per-bird intake calculator, flock aggregator, and model constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

#![deny(unsafe_code)]

//! # Flockfeed Engine
//!
//! Stateless estimation of daily feed and water for small-farm poultry.
//! Layers, leaves first: catalog, per-bird calculator, flock aggregator.
//! Every call is a pure transformation of its inputs.
//!
//! ```no_run
//! use flockfeed_core::{BirdInput, Environment};
//! use flockfeed_engine::{compute_flock_intake, ModelConstants, SpeciesCatalog};
//!
//! let birds = vec![BirdInput::new("layer_hen"), BirdInput::new("rooster")];
//! let result = compute_flock_intake(
//!     SpeciesCatalog::builtin(),
//!     &birds,
//!     &Environment::default(),
//!     ModelConstants::global(),
//!     None,
//! );
//! ```

/// Species catalog and catalog loading
pub mod catalog;

/// Tunable model constants with environment overrides
pub mod config;

/// Flock aggregation
pub mod flock;

/// Per-bird intake calculation
pub mod intake;

pub use catalog::{CatalogError, SpeciesCatalog};
pub use config::{ConfigError, ModelConstants};
pub use flock::compute_flock_intake;
pub use intake::{compute_bird_intake, validate_environment};
