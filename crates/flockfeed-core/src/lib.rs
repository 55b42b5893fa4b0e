// ABOUTME: Core types and constants for the Flockfeed poultry ration engine
// ABOUTME: Foundation crate with domain models, the engine error taxonomy, and husbandry constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

#![deny(unsafe_code)]

//! # Flockfeed Core
//!
//! Foundation crate providing the shared vocabulary of the Flockfeed ration
//! engine. It holds data only: the algorithms live in `flockfeed-engine`.
//!
//! ## Modules
//!
//! - **errors**: `EngineError`, the fatal error taxonomy of a calculation call
//! - **constants**: Husbandry thresholds and reference values
//! - **models**: Species profiles, diet phases, bird inputs, environment, results, alerts

/// Fatal error taxonomy for intake calculations
pub mod errors;

/// Husbandry thresholds and reference values
pub mod constants;

/// Domain models (species, diet phases, inputs, results, alerts)
pub mod models;

pub use errors::{EngineError, EngineResult};
pub use models::{
    push_unique, ActivityProfile, Alert, BirdInput, BirdResult, CalciumRange, DietPhase,
    DietPhaseSpec, Environment, FlockResult, ForageCapacity, GroupSummary, ReproductionBounds, Sex,
    SpeciesDefaults, SpeciesGroup, SpeciesProfile,
};
