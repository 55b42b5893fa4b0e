// ABOUTME: Domain models for the ration engine: species, inputs, environment, results
// ABOUTME: Re-exports all model types for convenient use across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

/// Advisory alerts raised by the calculator
pub mod alert;
/// Per-call inputs: birds and environment
pub mod bird;
/// Calculator and aggregator outputs
pub mod results;
/// Species profiles and diet phases
pub mod species;

pub use alert::{push_unique, Alert};
pub use bird::{BirdInput, Environment};
pub use results::{BirdResult, FlockResult, GroupSummary};
pub use species::{
    ActivityProfile, CalciumRange, DietPhase, DietPhaseSpec, ForageCapacity, ReproductionBounds,
    Sex, SpeciesDefaults, SpeciesGroup, SpeciesProfile,
};
