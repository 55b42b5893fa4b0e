// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides reference environments, bird fixtures, and float comparison helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `flockfeed`

use flockfeed::{
    compute_bird_intake, BirdInput, BirdResult, Environment, ModelConstants, SpeciesCatalog,
};

/// Reference environment: 24 °C, quality 0.8, 10 m² for a single bird
pub fn reference_environment(pasture_hours: f64) -> Environment {
    Environment {
        temperature_c: 24.0,
        pasture_hours,
        pasture_quality: 0.8,
        total_area_m2: 10.0,
        bird_count: Some(1),
    }
}

/// Same as `reference_environment` at a different temperature
pub fn environment_at(pasture_hours: f64, temperature_c: f64) -> Environment {
    Environment {
        temperature_c,
        ..reference_environment(pasture_hours)
    }
}

/// Layer-phase hen laying 0.75 eggs of 58 g per day
pub fn reference_hen() -> BirdInput {
    BirdInput::new("layer_hen").with_laying(0.75, 58.0)
}

/// Calculate one bird against the built-in catalog and default constants
pub fn compute(input: &BirdInput, environment: &Environment) -> BirdResult {
    compute_bird_intake(
        SpeciesCatalog::builtin(),
        input,
        environment,
        &ModelConstants::default(),
    )
    .unwrap()
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
