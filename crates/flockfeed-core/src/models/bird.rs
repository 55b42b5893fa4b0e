// ABOUTME: Per-call calculation inputs: one bird (or homogeneous group) and its environment
// ABOUTME: Optional fields carry documented fallback chains resolved by the calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use super::DietPhase;
use serde::{Deserialize, Serialize};

/// One bird, as consumed by the intake calculator
///
/// Every optional field falls back to the species profile, then to a
/// hard-coded constant. Non-finite values are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BirdInput {
    /// Catalog species id
    pub species_id: String,
    /// Live weight override (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Diet phase override; ignored if the species does not declare it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_phase: Option<DietPhase>,
    /// Eggs per bird per day (0-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laying_rate: Option<f64>,
    /// Egg weight (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egg_weight_g: Option<f64>,
    /// Activity multiplier applied to maintenance energy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_factor: Option<f64>,
}

impl BirdInput {
    /// Bird of the given species with every field left to species defaults
    pub fn new(species_id: impl Into<String>) -> Self {
        Self {
            species_id: species_id.into(),
            ..Self::default()
        }
    }

    /// Set the live weight override
    #[must_use]
    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the diet phase override
    #[must_use]
    pub fn with_diet_phase(mut self, phase: DietPhase) -> Self {
        self.diet_phase = Some(phase);
        self
    }

    /// Set laying rate and egg weight
    #[must_use]
    pub fn with_laying(mut self, laying_rate: f64, egg_weight_g: f64) -> Self {
        self.laying_rate = Some(laying_rate);
        self.egg_weight_g = Some(egg_weight_g);
        self
    }

    /// Set the activity multiplier
    #[must_use]
    pub fn with_activity_factor(mut self, activity_factor: f64) -> Self {
        self.activity_factor = Some(activity_factor);
        self
    }
}

/// Environmental conditions for one calculation
///
/// Fields omitted from serialized input take the `Default` values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Environment {
    /// Ambient temperature (°C)
    pub temperature_c: f64,
    /// Pasture access (hours/day); negative values count as zero
    pub pasture_hours: f64,
    /// Pasture quality factor (0-1)
    pub pasture_quality: f64,
    /// Total usable ranging area (m²)
    pub total_area_m2: f64,
    /// Declared number of birds sharing the area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bird_count: Option<u32>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            temperature_c: 24.0,
            pasture_hours: 6.0,
            pasture_quality: 0.8,
            total_area_m2: 3000.0,
            bird_count: None,
        }
    }
}

impl Environment {
    /// Area available to each bird given a reference head count
    ///
    /// A zero head count is treated as a single bird.
    #[must_use]
    pub fn area_per_bird(&self, reference_bird_count: u32) -> f64 {
        self.total_area_m2 / f64::from(reference_bird_count.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_per_bird_divides_total_area() {
        let env = Environment {
            total_area_m2: 30.0,
            ..Environment::default()
        };
        assert!((env.area_per_bird(3) - 10.0).abs() < f64::EPSILON);
        assert!((env.area_per_bird(0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bird_input_deserializes_with_missing_optionals() {
        let input: BirdInput =
            serde_json::from_str(r#"{"species_id":"layer_hen","diet_phase":"layer"}"#).unwrap();
        assert_eq!(input.species_id, "layer_hen");
        assert_eq!(input.diet_phase, Some(DietPhase::Layer));
        assert_eq!(input.weight_kg, None);
    }
}
