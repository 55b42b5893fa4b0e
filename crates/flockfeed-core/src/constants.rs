// ABOUTME: Husbandry thresholds and reference values shared by the ration engine
// ABOUTME: Heat stress limits, forage dependency ceilings, and water reference temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! Husbandry constants
//!
//! Values that define advisory thresholds rather than tunable model
//! coefficients. Tunable coefficients live in `ModelConstants` in the engine
//! crate and may be overridden per call; these may not.

/// Temperature thresholds
pub mod temperature {
    /// Reference temperature (°C) at which the base water-to-feed ratio applies
    pub const WATER_REFERENCE_C: f64 = 21.0;

    /// Ambient temperature (°C) at or above which heat stress is flagged
    ///
    /// Above 32 °C laying flocks pant, feed intake drops, and water demand
    /// climbs 30-50 % over thermoneutral conditions.
    pub const HEAT_STRESS_C: f64 = 32.0;
}

/// Forage dependency ceilings per taxonomic group
///
/// Beyond these fractions of the ration displaced by pasture, a drop in
/// egg output is likely to reflect an energy deficit.
pub mod forage {
    /// Chicken-like birds
    pub const CHICKEN_ALERT_FRACTION: f64 = 0.20;

    /// Turkey-like birds
    pub const TURKEY_ALERT_FRACTION: f64 = 0.25;
}

/// Metabolic scaling
pub mod metabolism {
    /// Exponent applied to live weight for maintenance energy (Kleiber)
    pub const METABOLIC_WEIGHT_EXPONENT: f64 = 0.75;

    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
}
