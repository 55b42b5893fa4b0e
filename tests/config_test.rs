// ABOUTME: Integration tests for model constant configuration
// ABOUTME: Environment overrides, validation failures, and per-call constant overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::{assert_close, reference_environment, reference_hen};
use flockfeed::{compute_bird_intake, ConfigError, DietPhase, ModelConstants, SpeciesCatalog};
use serial_test::serial;
use std::env;

mod common;

const ALL_OVERRIDES: [&str; 7] = [
    "FLOCKFEED_MAINTENANCE_COEFFICIENT",
    "FLOCKFEED_EGG_ENERGY_COEFFICIENT",
    "FLOCKFEED_FEED_SAFETY_MARGIN",
    "FLOCKFEED_WATER_RATIO_21C",
    "FLOCKFEED_WATER_INCREASE_PER_C",
    "FLOCKFEED_WATER_MAX_RATIO",
    "FLOCKFEED_AREA_SATURATION_M2",
];

fn clear_env() {
    for name in ALL_OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_env();
    assert_eq!(ModelConstants::load().unwrap(), ModelConstants::default());
}

#[test]
#[serial]
fn test_every_override_is_applied() {
    clear_env();
    env::set_var("FLOCKFEED_MAINTENANCE_COEFFICIENT", "100");
    env::set_var("FLOCKFEED_EGG_ENERGY_COEFFICIENT", "2.0");
    env::set_var("FLOCKFEED_FEED_SAFETY_MARGIN", "0.1");
    env::set_var("FLOCKFEED_WATER_RATIO_21C", "1.8");
    env::set_var("FLOCKFEED_WATER_INCREASE_PER_C", "0.05");
    env::set_var("FLOCKFEED_WATER_MAX_RATIO", "6.5");
    env::set_var("FLOCKFEED_AREA_SATURATION_M2", "12");

    let constants = ModelConstants::load().unwrap();
    clear_env();

    assert_close(constants.maintenance_coefficient, 100.0, 0.0);
    assert_close(constants.egg_energy_coefficient, 2.0, 0.0);
    assert_close(constants.feed_safety_margin, 0.1, 0.0);
    assert_close(constants.water_feed_ratio_21c, 1.8, 0.0);
    assert_close(constants.water_increase_per_c, 0.05, 0.0);
    assert_close(constants.water_max_ratio, 6.5, 0.0);
    assert_close(constants.area_saturation_m2, 12.0, 0.0);
}

#[test]
#[serial]
fn test_inconsistent_overrides_fail_validation() {
    clear_env();
    env::set_var("FLOCKFEED_WATER_RATIO_21C", "5");
    env::set_var("FLOCKFEED_WATER_MAX_RATIO", "4");

    let err = ModelConstants::load().unwrap_err();
    clear_env();
    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_unparseable_override() {
    clear_env();
    env::set_var("FLOCKFEED_AREA_SATURATION_M2", "ten");

    let err = ModelConstants::load().unwrap_err();
    clear_env();
    assert!(err.to_string().contains("FLOCKFEED_AREA_SATURATION_M2"));
}

#[test]
fn test_constants_override_per_call() {
    let lean = ModelConstants {
        feed_safety_margin: 0.0,
        ..ModelConstants::default()
    };
    let result = compute_bird_intake(
        SpeciesCatalog::builtin(),
        &reference_hen(),
        &reference_environment(0.0),
        &lean,
    )
    .unwrap();
    // 109.51 g / 1.15
    assert_close(result.base_feed_g, 95.0, 0.0);
}

#[test]
fn test_fallback_table_override_per_call() {
    let mut rich = ModelConstants::default();
    rich.energy_density_fallbacks.insert(DietPhase::AllFlock, 3200.0);
    let result = compute_bird_intake(
        SpeciesCatalog::builtin(),
        &flockfeed::BirdInput::new("generic"),
        &reference_environment(0.0),
        &rich,
    )
    .unwrap();
    assert_close(result.energy_density_kcal_per_kg, 3200.0, 0.0);
}
