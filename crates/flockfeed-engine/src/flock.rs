// ABOUTME: Flock aggregation of per-bird intake under one shared environment
// ABOUTME: Shared area per bird, unrounded totals, species/phase group summaries, global alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! Flock Aggregator
//!
//! Runs the per-bird calculator over every bird of a flock. Area per bird is
//! a flock-level resource: it is computed once and shared by every bird in
//! the call. Totals are accumulated at full precision and rounded once.

use crate::catalog::SpeciesCatalog;
use crate::config::ModelConstants;
use crate::intake::{
    compute_breakdown, round_grams, round_litres, validate_environment, IntakeBreakdown,
};
use flockfeed_core::constants::temperature;
use flockfeed_core::{
    push_unique, Alert, BirdInput, DietPhase, EngineResult, Environment, FlockResult,
    GroupSummary,
};
use std::collections::HashMap;
use tracing::info;

/// Running totals for one species/phase group
struct GroupAccumulator {
    species_id: String,
    species_label: String,
    phase: DietPhase,
    quantity: u32,
    feed_g: f64,
    water_l: f64,
    forage_fraction_sum: f64,
    alerts: Vec<Alert>,
}

impl GroupAccumulator {
    fn new(breakdown: &IntakeBreakdown<'_>) -> Self {
        Self {
            species_id: breakdown.profile.id.clone(),
            species_label: breakdown.profile.label.clone(),
            phase: breakdown.result.phase,
            quantity: 0,
            feed_g: 0.0,
            water_l: 0.0,
            forage_fraction_sum: 0.0,
            alerts: Vec::new(),
        }
    }

    fn add(&mut self, breakdown: &IntakeBreakdown<'_>) {
        self.quantity += 1;
        self.feed_g += breakdown.result.final_feed_g;
        self.water_l += breakdown.result.water_l;
        self.forage_fraction_sum += breakdown.result.forage_fraction;
        for alert in &breakdown.result.alerts {
            push_unique(&mut self.alerts, *alert);
        }
    }

    fn finish(self) -> GroupSummary {
        let quantity = f64::from(self.quantity.max(1));
        GroupSummary {
            species_id: self.species_id,
            species_label: self.species_label,
            phase: self.phase,
            quantity: self.quantity,
            feed_per_bird_g: round_grams(self.feed_g / quantity),
            feed_total_g: round_grams(self.feed_g),
            water_per_bird_l: round_litres(self.water_l / quantity),
            water_total_l: round_litres(self.water_l),
            forage_pct: round_tenths(self.forage_fraction_sum / quantity * 100.0),
            alerts: self.alerts,
        }
    }
}

/// Calculate the daily requirement of a whole flock
///
/// The reference head count used for area per bird is
/// `reference_bird_count`, else the environment's declared count, else the
/// number of birds passed in. A zero count is treated as one.
///
/// # Errors
///
/// Returns the first per-bird error unchanged; no partial result is produced
pub fn compute_flock_intake(
    catalog: &SpeciesCatalog,
    birds: &[BirdInput],
    environment: &Environment,
    constants: &ModelConstants,
    reference_bird_count: Option<u32>,
) -> EngineResult<FlockResult> {
    validate_environment(environment)?;

    let reference_count = reference_bird_count
        .or(environment.bird_count)
        .unwrap_or_else(|| u32::try_from(birds.len()).unwrap_or(u32::MAX));
    let area_per_bird = environment.area_per_bird(reference_count);

    let breakdowns = birds
        .iter()
        .map(|bird| compute_breakdown(catalog, bird, environment, constants, area_per_bird))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut total_base_feed_g = 0.0;
    let mut total_final_feed_g = 0.0;
    let mut total_water_l = 0.0;
    let mut alerts = Vec::new();
    let mut groups: Vec<GroupAccumulator> = Vec::new();
    let mut group_index: HashMap<(&str, DietPhase), usize> = HashMap::new();

    for breakdown in &breakdowns {
        total_base_feed_g += breakdown.result.base_feed_g;
        total_final_feed_g += breakdown.result.final_feed_g;
        total_water_l += breakdown.result.water_l;
        for alert in &breakdown.result.alerts {
            push_unique(&mut alerts, *alert);
        }

        let key = (breakdown.profile.id.as_str(), breakdown.result.phase);
        let slot = *group_index.entry(key).or_insert_with(|| {
            groups.push(GroupAccumulator::new(breakdown));
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.add(breakdown);
        }
    }

    if environment.temperature_c >= temperature::HEAT_STRESS_C {
        push_unique(&mut alerts, Alert::HeatStress);
    }

    let reduction_pct = if total_base_feed_g > 0.0 {
        round_tenths((1.0 - total_final_feed_g / total_base_feed_g) * 100.0)
    } else {
        0.0
    };

    let mut groups: Vec<GroupSummary> = groups.into_iter().map(GroupAccumulator::finish).collect();
    groups.sort_by(|a, b| {
        a.species_label
            .cmp(&b.species_label)
            .then(a.phase.cmp(&b.phase))
            .then_with(|| a.species_id.cmp(&b.species_id))
    });

    info!(
        birds = birds.len(),
        groups = groups.len(),
        area_per_bird,
        total_base_feed_g,
        total_final_feed_g,
        total_water_l,
        "Computed flock intake"
    );

    Ok(FlockResult {
        total_base_feed_g: round_grams(total_base_feed_g),
        total_final_feed_g: round_grams(total_final_feed_g),
        total_water_l: round_litres(total_water_l),
        reduction_pct,
        area_per_bird_m2: area_per_bird,
        birds: breakdowns.iter().map(IntakeBreakdown::rounded).collect(),
        groups,
        alerts,
    })
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
