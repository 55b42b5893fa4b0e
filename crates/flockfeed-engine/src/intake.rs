// ABOUTME: Per-bird daily feed and water estimation from an energy balance
// ABOUTME: Resolves inputs through species fallbacks, applies forage substitution and water ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! Per-Bird Intake Calculator
//!
//! Estimates one bird's daily feed and water requirement:
//!
//! 1. Maintenance energy scales with metabolic body weight (W^0.75)
//! 2. Egg production adds energy proportional to egg mass laid per day
//! 3. Energy is converted to feed mass through the ration's metabolizable
//!    energy density, plus a safety margin for spillage and variation
//! 4. Pasture displaces a saturating fraction of the ration, scaled down by
//!    pasture quality and stocking density
//! 5. Water follows feed through a temperature-dependent ratio
//!
//! # Scientific References
//!
//! - Kleiber, M. (1947). Body size and metabolic rate.
//!   *Physiological Reviews*, 27(4), 511-541.
//!   <https://doi.org/10.1152/physrev.1947.27.4.511>
//!
//! - National Research Council (1994). *Nutrient Requirements of Poultry*,
//!   9th revised edition. National Academy Press.
//!   <https://doi.org/10.17226/2114>

use crate::catalog::SpeciesCatalog;
use crate::config::ModelConstants;
use flockfeed_core::constants::{metabolism, temperature};
use flockfeed_core::{
    push_unique, Alert, BirdInput, BirdResult, DietPhase, EngineError, EngineResult, Environment,
    SpeciesProfile,
};
use tracing::{debug, warn};

/// Unrounded calculation of one bird, kept for flock accumulation
#[derive(Debug, Clone)]
pub(crate) struct IntakeBreakdown<'a> {
    /// Catalog entry the bird resolved to
    pub(crate) profile: &'a SpeciesProfile,
    /// Full-precision result
    pub(crate) result: BirdResult,
}

impl IntakeBreakdown<'_> {
    /// Result with feed rounded to whole grams and water to 0.01 L
    pub(crate) fn rounded(&self) -> BirdResult {
        BirdResult {
            base_feed_g: round_grams(self.result.base_feed_g),
            final_feed_g: round_grams(self.result.final_feed_g),
            water_l: round_litres(self.result.water_l),
            ..self.result.clone()
        }
    }
}

/// Calculate the daily feed and water requirement of one bird
///
/// Area per bird is derived from the environment alone: total area divided
/// by the declared bird count, or by one when none is declared.
///
/// # Errors
///
/// Returns an error if the species is unknown, declares no diet phase, has
/// no usable weight or energy density, or the environment is not finite
pub fn compute_bird_intake(
    catalog: &SpeciesCatalog,
    input: &BirdInput,
    environment: &Environment,
    constants: &ModelConstants,
) -> EngineResult<BirdResult> {
    validate_environment(environment)?;
    let area_per_bird = environment.area_per_bird(environment.bird_count.unwrap_or(1));
    let breakdown = compute_breakdown(catalog, input, environment, constants, area_per_bird)?;
    Ok(breakdown.rounded())
}

/// Reject environments the model cannot evaluate
///
/// # Errors
///
/// Returns `InvalidEnvironment` naming the first non-finite field, or a
/// negative total area
pub fn validate_environment(environment: &Environment) -> EngineResult<()> {
    let fields = [
        ("temperature_c", environment.temperature_c),
        ("pasture_hours", environment.pasture_hours),
        ("pasture_quality", environment.pasture_quality),
        ("total_area_m2", environment.total_area_m2),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(EngineError::InvalidEnvironment { field, value });
        }
    }
    if environment.total_area_m2 < 0.0 {
        return Err(EngineError::InvalidEnvironment {
            field: "total_area_m2",
            value: environment.total_area_m2,
        });
    }
    Ok(())
}

/// Full-precision calculation with an externally supplied area per bird
///
/// The environment must already have passed `validate_environment`.
pub(crate) fn compute_breakdown<'a>(
    catalog: &'a SpeciesCatalog,
    input: &BirdInput,
    environment: &Environment,
    constants: &ModelConstants,
    area_per_bird: f64,
) -> EngineResult<IntakeBreakdown<'a>> {
    let species_id = input.species_id.as_str();
    let profile = catalog.lookup(species_id)?;

    let weight_kg = resolve_weight(profile, input.weight_kg)?;

    let requested = match input.diet_phase {
        Some(phase) => phase,
        None => catalog.default_diet_phase(species_id)?,
    };
    let phase_spec = catalog.resolve_diet_spec(species_id, requested)?;
    let phase = phase_spec.phase;

    let energy_density =
        resolve_energy_density(profile, phase, phase_spec.me_kcal_per_kg, constants)?;
    let (laying_rate, egg_weight_g) = resolve_reproduction(profile, input);
    let activity_factor =
        resolve_activity(profile, input.activity_factor, environment.pasture_hours);

    // Energy balance (kcal/day)
    let maintenance_coefficient = profile
        .maintenance_coefficient
        .unwrap_or(constants.maintenance_coefficient);
    let maintenance_kcal =
        maintenance_coefficient * weight_kg.powf(metabolism::METABOLIC_WEIGHT_EXPONENT);
    let egg_kcal = constants.egg_energy_coefficient * laying_rate * egg_weight_g;
    let total_kcal = maintenance_kcal.mul_add(activity_factor, egg_kcal);

    let base_feed_g = ensure_finite(
        profile,
        "base_feed_g",
        total_kcal / energy_density
            * metabolism::GRAMS_PER_KG
            * (1.0 + constants.feed_safety_margin),
    )?;

    let forage_fraction = forage_fraction(profile, environment, constants, area_per_bird);
    let final_feed_g = base_feed_g * (1.0 - forage_fraction);

    let water_ratio = water_ratio(environment.temperature_c, constants);
    let water_l = ensure_finite(
        profile,
        "water_l",
        final_feed_g / metabolism::GRAMS_PER_KG * water_ratio,
    )?;

    let alerts = bird_alerts(profile, phase, environment.temperature_c, forage_fraction);

    debug!(
        species_id,
        weight_kg,
        phase = %phase,
        laying_rate,
        egg_weight_g,
        activity_factor,
        energy_density,
        base_feed_g,
        forage_fraction,
        final_feed_g,
        water_l,
        "Computed bird intake"
    );

    Ok(IntakeBreakdown {
        profile,
        result: BirdResult {
            species_id: profile.id.clone(),
            weight_kg,
            phase,
            laying_rate,
            egg_weight_g,
            activity_factor,
            energy_density_kcal_per_kg: energy_density,
            maintenance_kcal,
            egg_kcal,
            base_feed_g,
            forage_fraction,
            final_feed_g,
            water_ratio,
            water_l,
            alerts,
        },
    })
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Fail when an output quantity left the finite range
fn ensure_finite(
    profile: &SpeciesProfile,
    quantity: &'static str,
    value: f64,
) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NonFiniteResult {
            species_id: profile.id.clone(),
            quantity,
            value,
        })
    }
}

fn resolve_weight(profile: &SpeciesProfile, requested: Option<f64>) -> EngineResult<f64> {
    let weight_kg = requested
        .filter(|w| is_usable(*w))
        .unwrap_or(profile.default_weight_kg);
    if is_usable(weight_kg) {
        Ok(weight_kg)
    } else {
        Err(EngineError::InvalidWeight {
            species_id: profile.id.clone(),
            weight_kg,
        })
    }
}

fn resolve_energy_density(
    profile: &SpeciesProfile,
    phase: DietPhase,
    declared: Option<f64>,
    constants: &ModelConstants,
) -> EngineResult<f64> {
    if let Some(me) = declared.filter(|me| is_usable(*me)) {
        return Ok(me);
    }
    let fallback = constants.fallback_energy_density(phase).ok_or_else(|| {
        EngineError::MissingEnergyDensity {
            species_id: profile.id.clone(),
            phase,
        }
    })?;
    warn!(
        species_id = %profile.id,
        phase = %phase,
        fallback,
        "Diet phase carries no energy density, using phase default"
    );
    Ok(fallback)
}

/// Laying rate and egg weight after fallbacks and species bounds
fn resolve_reproduction(profile: &SpeciesProfile, input: &BirdInput) -> (f64, f64) {
    let laying_rate = input
        .laying_rate
        .filter(|r| r.is_finite())
        .or(profile.defaults.laying_rate)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);
    let egg_weight_g = input
        .egg_weight_g
        .filter(|g| g.is_finite())
        .or(profile.defaults.egg_weight_g)
        .unwrap_or(0.0)
        .max(0.0);

    match profile.reproduction_bounds {
        Some(bounds) => (
            bounds.clamp_laying_rate(laying_rate),
            bounds.clamp_egg_weight(egg_weight_g),
        ),
        None => (laying_rate, egg_weight_g),
    }
}

fn resolve_activity(profile: &SpeciesProfile, requested: Option<f64>, pasture_hours: f64) -> f64 {
    requested
        .filter(|a| is_usable(*a))
        .or_else(|| {
            profile
                .activity
                .map(|activity| activity.for_pasture_hours(pasture_hours))
        })
        .unwrap_or(1.0)
}

/// Fraction of the ration displaced by pasture, within `[0, fs_max]`
fn forage_fraction(
    profile: &SpeciesProfile,
    environment: &Environment,
    constants: &ModelConstants,
    area_per_bird: f64,
) -> f64 {
    let hours = environment.pasture_hours.max(0.0);
    let quality = environment.pasture_quality.clamp(0.0, 1.0);
    let area_factor = (area_per_bird / constants.area_saturation_m2).clamp(0.0, 1.0);
    let fs_max = profile.forage.fs_max;

    let fraction = fs_max * (1.0 - (-profile.forage.k * hours).exp()) * quality * area_factor;
    if fraction.is_finite() {
        fraction.clamp(0.0, fs_max)
    } else {
        0.0
    }
}

/// Water-to-feed ratio (L/kg) at the given temperature
fn water_ratio(temperature_c: f64, constants: &ModelConstants) -> f64 {
    let excess_c = (temperature_c - temperature::WATER_REFERENCE_C).max(0.0);
    let ratio =
        constants.water_feed_ratio_21c * constants.water_increase_per_c.mul_add(excess_c, 1.0);
    ratio.min(constants.water_max_ratio)
}

fn bird_alerts(
    profile: &SpeciesProfile,
    phase: DietPhase,
    temperature_c: f64,
    forage_fraction: f64,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if profile.is_male() && phase.is_egg_laying() {
        push_unique(&mut alerts, Alert::MaleLayerDiet);
    }
    if temperature_c >= temperature::HEAT_STRESS_C {
        push_unique(&mut alerts, Alert::HeatStress);
    }
    if profile
        .group
        .forage_alert_threshold()
        .is_some_and(|threshold| forage_fraction > threshold)
    {
        push_unique(&mut alerts, Alert::ForageDependency);
    }
    alerts
}

/// Round to whole grams
pub(crate) fn round_grams(grams: f64) -> f64 {
    grams.round()
}

/// Round to 0.01 L
pub(crate) fn round_litres(litres: f64) -> f64 {
    (litres * 100.0).round() / 100.0
}
