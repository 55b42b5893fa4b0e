// ABOUTME: Error taxonomy for per-bird and flock intake calculations
// ABOUTME: Every variant is fatal to the calculation call that raised it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! # Engine Error Types
//!
//! A calculation either succeeds completely or fails with one of these
//! variants. Nothing is silently defaulted past the point of detection, and
//! the flock aggregator propagates the first failure unchanged.

use crate::models::DietPhase;
use thiserror::Error;

/// Result alias used by all engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal errors raised by catalog lookups and intake calculations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Species id is not present in the catalog
    #[error("Unknown species '{species_id}'")]
    UnknownSpecies {
        /// Requested species id
        species_id: String,
    },

    /// Species entry declares zero diet phases
    #[error("Species '{species_id}' declares no diet phases")]
    NoDietPhase {
        /// Species whose catalog entry is empty
        species_id: String,
    },

    /// Resolved live weight is non-finite or not positive
    #[error("Invalid live weight {weight_kg} kg for species '{species_id}'")]
    InvalidWeight {
        /// Species of the offending bird
        species_id: String,
        /// Weight that failed validation
        weight_kg: f64,
    },

    /// Neither the phase spec nor the fallback table yields an energy density
    #[error("No usable energy density for phase '{phase}' of species '{species_id}'")]
    MissingEnergyDensity {
        /// Species of the offending bird
        species_id: String,
        /// Resolved diet phase
        phase: DietPhase,
    },

    /// Environment carries a value the model cannot use
    #[error("Invalid environment value for {field}: {value}")]
    InvalidEnvironment {
        /// Name of the offending environment field
        field: &'static str,
        /// Value that failed validation
        value: f64,
    },

    /// Energy balance overflowed for otherwise valid inputs
    #[error("Non-finite {quantity} ({value}) for species '{species_id}'")]
    NonFiniteResult {
        /// Species of the offending bird
        species_id: String,
        /// Name of the output quantity
        quantity: &'static str,
        /// Value that was produced
        value: f64,
    },
}

impl EngineError {
    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownSpecies { .. } => "UNKNOWN_SPECIES",
            Self::NoDietPhase { .. } => "NO_DIET_PHASE",
            Self::InvalidWeight { .. } => "INVALID_WEIGHT",
            Self::MissingEnergyDensity { .. } => "MISSING_ENERGY_DENSITY",
            Self::InvalidEnvironment { .. } => "INVALID_ENVIRONMENT",
            Self::NonFiniteResult { .. } => "NON_FINITE_RESULT",
        }
    }

    /// Create an unknown species error
    pub fn unknown_species(species_id: impl Into<String>) -> Self {
        Self::UnknownSpecies {
            species_id: species_id.into(),
        }
    }

    /// Create a no diet phase error
    pub fn no_diet_phase(species_id: impl Into<String>) -> Self {
        Self::NoDietPhase {
            species_id: species_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            EngineError::unknown_species("emu").code(),
            "UNKNOWN_SPECIES"
        );
        assert_eq!(EngineError::no_diet_phase("emu").code(), "NO_DIET_PHASE");
        assert_eq!(
            EngineError::MissingEnergyDensity {
                species_id: "emu".into(),
                phase: DietPhase::Layer,
            }
            .code(),
            "MISSING_ENERGY_DENSITY"
        );
    }

    #[test]
    fn test_error_messages_name_the_species() {
        let err = EngineError::InvalidWeight {
            species_id: "rooster".into(),
            weight_kg: -1.0,
        };
        let message = err.to_string();
        assert!(message.contains("rooster"));
        assert!(message.contains("-1"));

        let err = EngineError::MissingEnergyDensity {
            species_id: "peahen".into(),
            phase: DietPhase::OrnamentalAdult,
        };
        assert!(err.to_string().contains("ornamental_adult"));

        let err = EngineError::NonFiniteResult {
            species_id: "layer_hen".into(),
            quantity: "base_feed_g",
            value: f64::INFINITY,
        };
        assert_eq!(err.code(), "NON_FINITE_RESULT");
        assert!(err.to_string().contains("base_feed_g"));
    }
}
