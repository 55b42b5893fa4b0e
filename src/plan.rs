// ABOUTME: Flock plan input document combining environment, birds, and inventory records
// ABOUTME: Loads plan files and runs the flock aggregator over the combined bird list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use crate::inventory::{bird_inputs_from_records, AnimalRecord};
use flockfeed_core::{BirdInput, EngineResult, Environment, FlockResult};
use flockfeed_engine::{compute_flock_intake, ModelConstants, SpeciesCatalog};
use serde::{Deserialize, Serialize};

/// A flock plan request as read from JSON
///
/// Explicit `birds` come first, followed by one bird per active inventory
/// record in `animals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlockPlanInput {
    /// Shared environment; defaults apply to omitted fields
    #[serde(default)]
    pub environment: Environment,
    /// Birds given directly as calculator inputs
    #[serde(default)]
    pub birds: Vec<BirdInput>,
    /// Inventory records mapped onto calculator inputs
    #[serde(default)]
    pub animals: Vec<AnimalRecord>,
    /// Override of the head count used for area per bird
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_bird_count: Option<u32>,
}

impl FlockPlanInput {
    /// Parse a plan document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// All calculator inputs of the plan, explicit birds first
    #[must_use]
    pub fn bird_inputs(&self, catalog: &SpeciesCatalog) -> Vec<BirdInput> {
        let mut birds = self.birds.clone();
        birds.extend(bird_inputs_from_records(&self.animals, catalog));
        birds
    }

    /// Run the flock aggregator over the plan
    ///
    /// # Errors
    ///
    /// Returns the first calculation error of any bird
    pub fn compute(
        &self,
        catalog: &SpeciesCatalog,
        constants: &ModelConstants,
    ) -> EngineResult<FlockResult> {
        compute_flock_intake(
            catalog,
            &self.bird_inputs(catalog),
            &self.environment,
            constants,
            self.reference_bird_count,
        )
    }
}
