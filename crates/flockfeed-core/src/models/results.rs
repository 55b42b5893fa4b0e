// ABOUTME: Output records of the intake calculator and the flock aggregator
// ABOUTME: Per-bird results, per species/phase group summaries, and flock totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use super::{Alert, DietPhase};
use serde::{Deserialize, Serialize};

/// Daily requirement of one bird
///
/// Feed fields are rounded to whole grams and water to 0.01 L. Flock totals
/// are never summed from these rounded fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BirdResult {
    /// Catalog species id
    pub species_id: String,
    /// Resolved live weight (kg)
    pub weight_kg: f64,
    /// Resolved diet phase
    pub phase: DietPhase,
    /// Resolved laying rate, after species bounds
    pub laying_rate: f64,
    /// Resolved egg weight (g), after species bounds
    pub egg_weight_g: f64,
    /// Resolved activity multiplier
    pub activity_factor: f64,
    /// Energy density used for the energy-to-mass conversion (kcal/kg)
    pub energy_density_kcal_per_kg: f64,
    /// Maintenance energy before activity scaling (kcal/day)
    pub maintenance_kcal: f64,
    /// Egg production energy (kcal/day)
    pub egg_kcal: f64,
    /// Feed before forage substitution (g/day)
    pub base_feed_g: f64,
    /// Fraction of feed displaced by pasture
    pub forage_fraction: f64,
    /// Feed after forage substitution (g/day)
    pub final_feed_g: f64,
    /// Water-to-feed ratio (L/kg)
    pub water_ratio: f64,
    /// Drinking water (L/day)
    pub water_l: f64,
    /// Advisories, first-seen order, no duplicates
    pub alerts: Vec<Alert>,
}

/// Aggregate of all birds sharing a species and resolved phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSummary {
    /// Catalog species id
    pub species_id: String,
    /// Species display label
    pub species_label: String,
    /// Resolved diet phase
    pub phase: DietPhase,
    /// Number of birds in the group
    pub quantity: u32,
    /// Mean final feed per bird (g/day)
    pub feed_per_bird_g: f64,
    /// Group final feed (g/day)
    pub feed_total_g: f64,
    /// Mean water per bird (L/day)
    pub water_per_bird_l: f64,
    /// Group water (L/day)
    pub water_total_l: f64,
    /// Mean forage substitution (%)
    pub forage_pct: f64,
    /// Union of member alerts
    pub alerts: Vec<Alert>,
}

/// Daily requirement of a whole flock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlockResult {
    /// Feed before forage substitution (g/day)
    pub total_base_feed_g: f64,
    /// Feed after forage substitution (g/day)
    pub total_final_feed_g: f64,
    /// Drinking water (L/day)
    pub total_water_l: f64,
    /// Flock-wide feed reduction from pasture (%)
    pub reduction_pct: f64,
    /// Area per bird shared by every calculation in the call (m²)
    pub area_per_bird_m2: f64,
    /// Per-bird results, input order
    pub birds: Vec<BirdResult>,
    /// Per species/phase summaries, sorted by species label
    pub groups: Vec<GroupSummary>,
    /// Union of all bird alerts plus the environment heat alert
    pub alerts: Vec<Alert>,
}

impl FlockResult {
    /// Feed saved per day by pasture access (g/day)
    #[must_use]
    pub fn pasture_savings_g(&self) -> f64 {
        self.total_base_feed_g - self.total_final_feed_g
    }

    /// Weekly feed after substitution (kg/week)
    #[must_use]
    pub fn weekly_feed_kg(&self) -> f64 {
        self.total_final_feed_g * 7.0 / 1000.0
    }
}
