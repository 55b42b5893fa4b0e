// ABOUTME: Advisory alerts raised when inputs fall outside safe operating ranges
// ABOUTME: Each alert has a stable code for machines and an advisory message for people
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory raised by the intake calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    /// Male bird on the egg-laying ration (excess calcium)
    MaleLayerDiet,
    /// Ambient temperature at or above the heat stress threshold
    HeatStress,
    /// Pasture displaces more of the ration than the group can safely lose
    ForageDependency,
}

impl Alert {
    /// Stable snake_case code, matching the serialized form
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MaleLayerDiet => "male_layer_diet",
            Self::HeatStress => "heat_stress",
            Self::ForageDependency => "forage_dependency",
        }
    }

    /// Advisory text shown to the keeper
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MaleLayerDiet => {
                "Layer diet is inappropriate for males (high calcium). Feed all-flock and offer free-choice calcium separately for hens."
            }
            Self::HeatStress => "Heat: increase water (+30-50%), provide shade and ventilation.",
            Self::ForageDependency => {
                "High forage dependency: risk of energy deficit if egg production drops."
            }
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Append an alert unless it is already present, preserving first-seen order
pub fn push_unique(alerts: &mut Vec<Alert>, alert: Alert) {
    if !alerts.contains(&alert) {
        alerts.push(alert);
    }
}
