// ABOUTME: Tunable model constants for the ration engine with environment overrides
// ABOUTME: Provides defaults, validation, env loading, and a lazily initialised global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! Model Constants Configuration
//!
//! Global coefficients of the energy balance and water model. Every
//! calculation takes a `&ModelConstants`, so callers can override any value
//! per call; `ModelConstants::global()` is the process-wide default, loaded
//! once from the environment.
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `FLOCKFEED_MAINTENANCE_COEFFICIENT` | `maintenance_coefficient` |
//! | `FLOCKFEED_EGG_ENERGY_COEFFICIENT` | `egg_energy_coefficient` |
//! | `FLOCKFEED_FEED_SAFETY_MARGIN` | `feed_safety_margin` |
//! | `FLOCKFEED_WATER_RATIO_21C` | `water_feed_ratio_21c` |
//! | `FLOCKFEED_WATER_INCREASE_PER_C` | `water_increase_per_c` |
//! | `FLOCKFEED_WATER_MAX_RATIO` | `water_max_ratio` |
//! | `FLOCKFEED_AREA_SATURATION_M2` | `area_saturation_m2` |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use flockfeed_core::DietPhase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global constants singleton
static MODEL_CONSTANTS: OnceLock<ModelConstants> = OnceLock::new();

/// Tunable global parameters of the intake model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConstants {
    /// Maintenance energy per kg^0.75 of body weight (kcal/day): 110
    pub maintenance_coefficient: f64,
    /// Energy per gram of egg mass produced (kcal/g): 2.2
    pub egg_energy_coefficient: f64,
    /// Fractional overhead added to base consumption: 0.15
    pub feed_safety_margin: f64,
    /// Water-to-feed ratio at 21 °C (L/kg): 2.0
    pub water_feed_ratio_21c: f64,
    /// Relative ratio increase per degree above 21 °C: 0.07
    pub water_increase_per_c: f64,
    /// Hard ceiling on the water-to-feed ratio: 8.0
    pub water_max_ratio: f64,
    /// Area per bird beyond which crowding no longer limits forage (m²): 10
    pub area_saturation_m2: f64,
    /// Energy density used when a phase spec carries none (kcal/kg)
    pub energy_density_fallbacks: BTreeMap<DietPhase, f64>,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            maintenance_coefficient: 110.0,
            egg_energy_coefficient: 2.2,
            feed_safety_margin: 0.15,
            water_feed_ratio_21c: 2.0,
            water_increase_per_c: 0.07,
            water_max_ratio: 8.0,
            area_saturation_m2: 10.0,
            energy_density_fallbacks: default_energy_densities(),
        }
    }
}

/// Typical metabolizable energy of commercial rations per phase (kcal/kg)
fn default_energy_densities() -> BTreeMap<DietPhase, f64> {
    BTreeMap::from([
        (DietPhase::Starter, 2900.0),
        (DietPhase::Grower, 3000.0),
        (DietPhase::Finisher, 3100.0),
        (DietPhase::Layer, 2800.0),
        (DietPhase::Breeder, 2800.0),
        (DietPhase::AllFlock, 2900.0),
        (DietPhase::Adult, 3000.0),
        (DietPhase::OrnamentalAdult, 3000.0),
    ])
}

impl ModelConstants {
    /// Get the global constants instance
    pub fn global() -> &'static Self {
        MODEL_CONSTANTS.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load model constants: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load constants from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Fallback energy density for a phase, if the table holds a usable one
    #[must_use]
    pub fn fallback_energy_density(&self, phase: DietPhase) -> Option<f64> {
        self.energy_density_fallbacks
            .get(&phase)
            .copied()
            .filter(|me| me.is_finite() && *me > 0.0)
    }

    /// Validate the constants
    ///
    /// # Errors
    ///
    /// Returns an error naming the first constant outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            (
                self.maintenance_coefficient,
                "maintenance_coefficient must be positive",
            ),
            (
                self.egg_energy_coefficient,
                "egg_energy_coefficient must be positive",
            ),
            (
                self.water_feed_ratio_21c,
                "water_feed_ratio_21c must be positive",
            ),
            (self.area_saturation_m2, "area_saturation_m2 must be positive"),
        ];
        for (value, message) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        if !self.feed_safety_margin.is_finite() || self.feed_safety_margin < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "feed_safety_margin must be >= 0",
            ));
        }
        if !self.water_increase_per_c.is_finite() || self.water_increase_per_c < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "water_increase_per_c must be >= 0",
            ));
        }
        if !self.water_max_ratio.is_finite() || self.water_max_ratio < self.water_feed_ratio_21c {
            return Err(ConfigError::InvalidRange(
                "water_max_ratio must be >= water_feed_ratio_21c",
            ));
        }
        if self
            .energy_density_fallbacks
            .values()
            .any(|me| !me.is_finite() || *me <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "fallback energy densities must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FLOCKFEED_MAINTENANCE_COEFFICIENT",
            &mut self.maintenance_coefficient,
        )?;
        Self::apply_env_var(
            "FLOCKFEED_EGG_ENERGY_COEFFICIENT",
            &mut self.egg_energy_coefficient,
        )?;
        Self::apply_env_var("FLOCKFEED_FEED_SAFETY_MARGIN", &mut self.feed_safety_margin)?;
        Self::apply_env_var("FLOCKFEED_WATER_RATIO_21C", &mut self.water_feed_ratio_21c)?;
        Self::apply_env_var(
            "FLOCKFEED_WATER_INCREASE_PER_C",
            &mut self.water_increase_per_c,
        )?;
        Self::apply_env_var("FLOCKFEED_WATER_MAX_RATIO", &mut self.water_max_ratio)?;
        Self::apply_env_var("FLOCKFEED_AREA_SATURATION_M2", &mut self.area_saturation_m2)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const OVERRIDES: [&str; 3] = [
        "FLOCKFEED_MAINTENANCE_COEFFICIENT",
        "FLOCKFEED_WATER_MAX_RATIO",
        "FLOCKFEED_FEED_SAFETY_MARGIN",
    ];

    fn clear_overrides() {
        for name in OVERRIDES {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let constants = ModelConstants::default();
        assert!(constants.validate().is_ok());
        assert_eq!(
            constants.fallback_energy_density(DietPhase::Layer),
            Some(2800.0)
        );
    }

    #[test]
    fn test_validation_rejects_inverted_water_ratios() {
        let constants = ModelConstants {
            water_max_ratio: 1.5,
            ..ModelConstants::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validation_rejects_negative_margin() {
        let constants = ModelConstants {
            feed_safety_margin: -0.1,
            ..ModelConstants::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_fallback_ignores_non_positive_entries() {
        let mut constants = ModelConstants::default();
        constants
            .energy_density_fallbacks
            .insert(DietPhase::Grower, 0.0);
        constants.energy_density_fallbacks.remove(&DietPhase::Adult);
        assert_eq!(constants.fallback_energy_density(DietPhase::Grower), None);
        assert_eq!(constants.fallback_energy_density(DietPhase::Adult), None);
        assert!(constants.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_applies_env_overrides() {
        clear_overrides();
        env::set_var("FLOCKFEED_MAINTENANCE_COEFFICIENT", "105.5");
        env::set_var("FLOCKFEED_WATER_MAX_RATIO", " 6 ");

        let constants = ModelConstants::load().unwrap();
        assert!((constants.maintenance_coefficient - 105.5).abs() < f64::EPSILON);
        assert!((constants.water_max_ratio - 6.0).abs() < f64::EPSILON);
        assert!((constants.egg_energy_coefficient - 2.2).abs() < f64::EPSILON);

        clear_overrides();
    }

    #[test]
    #[serial]
    fn test_load_rejects_unparseable_override() {
        clear_overrides();
        env::set_var("FLOCKFEED_FEED_SAFETY_MARGIN", "fifteen percent");

        let result = ModelConstants::load();
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        clear_overrides();
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_override_value() {
        clear_overrides();
        env::set_var("FLOCKFEED_MAINTENANCE_COEFFICIENT", "-3");

        let result = ModelConstants::load();
        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

        clear_overrides();
    }
}
