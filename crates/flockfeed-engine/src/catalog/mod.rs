// ABOUTME: Species catalog: static nutritional reference data keyed by species id
// ABOUTME: Lookup, default diet phase resolution, and validated loading of external catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! # Species Catalog
//!
//! Every species entry carries an ordered list of diet phases plus a default
//! phase pointer, so there is one resolution path for all species. Catalogs
//! are validated once at load time; lookups afterwards never fail except for
//! unknown ids.

mod builtin;

use crate::config::ModelConstants;
use flockfeed_core::{DietPhase, DietPhaseSpec, EngineError, EngineResult, SpeciesProfile};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Built-in catalog singleton
static BUILTIN_CATALOG: OnceLock<SpeciesCatalog> = OnceLock::new();

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON is malformed
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share an id
    #[error("Duplicate species id '{0}'")]
    DuplicateSpecies(String),

    /// An entry violates a catalog invariant
    #[error("Invalid species '{species_id}': {reason}")]
    Invalid {
        /// Offending species id
        species_id: String,
        /// What is wrong with it
        reason: String,
    },

    /// Catalog holds no species at all
    #[error("Catalog contains no species")]
    Empty,
}

impl CatalogError {
    fn invalid(profile: &SpeciesProfile, reason: impl Into<String>) -> Self {
        Self::Invalid {
            species_id: profile.id.clone(),
            reason: reason.into(),
        }
    }
}

/// Immutable mapping from species id to profile
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    profiles: Vec<SpeciesProfile>,
    index: HashMap<String, usize>,
}

impl SpeciesCatalog {
    /// Built-in catalog of common small-farm poultry
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(|| {
            let profiles = builtin::profiles();
            Self {
                index: index_of(&profiles),
                profiles,
            }
        })
    }

    /// Build a catalog from profiles, validating every entry
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, ids repeat, or any entry
    /// violates a catalog invariant
    pub fn from_profiles(profiles: Vec<SpeciesProfile>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(CatalogError::DuplicateSpecies(profile.id.clone()));
            }
            validate_profile(profile)?;
        }

        debug!(species = profiles.len(), "Species catalog loaded");
        Ok(Self {
            index: index_of(&profiles),
            profiles,
        })
    }

    /// Parse a JSON array of species profiles
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or validation fails
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<SpeciesProfile> = serde_json::from_str(json)?;
        Self::from_profiles(profiles)
    }

    /// Load a JSON catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading species catalog file");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Profiles in declaration order
    pub fn species(&self) -> impl Iterator<Item = &SpeciesProfile> {
        self.profiles.iter()
    }

    /// Number of species in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Whether the catalog holds the given id
    #[must_use]
    pub fn contains(&self, species_id: &str) -> bool {
        self.index.contains_key(species_id)
    }

    /// Profile for a species id
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownSpecies` if the id is not in the catalog
    pub fn lookup(&self, species_id: &str) -> EngineResult<&SpeciesProfile> {
        self.index
            .get(species_id)
            .and_then(|&i| self.profiles.get(i))
            .ok_or_else(|| EngineError::unknown_species(species_id))
    }

    /// Declared default phase, or the first declared phase
    ///
    /// # Errors
    ///
    /// Returns `UnknownSpecies` for unknown ids and `NoDietPhase` when the
    /// species declares no phases
    pub fn default_diet_phase(&self, species_id: &str) -> EngineResult<DietPhase> {
        self.lookup(species_id)?
            .default_phase()
            .ok_or_else(|| EngineError::no_diet_phase(species_id))
    }

    /// Spec for the requested phase, or the default phase's spec if the
    /// species does not declare it
    ///
    /// # Errors
    ///
    /// Returns `UnknownSpecies` for unknown ids and `NoDietPhase` when the
    /// species declares no phases
    pub fn resolve_diet_spec(
        &self,
        species_id: &str,
        phase: DietPhase,
    ) -> EngineResult<&DietPhaseSpec> {
        let profile = self.lookup(species_id)?;
        if let Some(spec) = profile.diet_spec(phase) {
            return Ok(spec);
        }

        let fallback = profile
            .default_phase()
            .ok_or_else(|| EngineError::no_diet_phase(species_id))?;
        warn!(
            species_id,
            requested = %phase,
            resolved = %fallback,
            "Diet phase not declared for species, using default"
        );
        profile
            .diet_spec(fallback)
            .ok_or_else(|| EngineError::no_diet_phase(species_id))
    }

    /// Verify every declared phase resolves to a usable energy density
    ///
    /// # Errors
    ///
    /// Returns `MissingEnergyDensity` for the first phase that has neither a
    /// positive spec value nor a fallback entry
    pub fn check_energy_coverage(&self, constants: &ModelConstants) -> EngineResult<()> {
        for profile in &self.profiles {
            for spec in &profile.diet_phases {
                let covered = spec.me_kcal_per_kg.is_some_and(|me| me.is_finite() && me > 0.0)
                    || constants.fallback_energy_density(spec.phase).is_some();
                if !covered {
                    return Err(EngineError::MissingEnergyDensity {
                        species_id: profile.id.clone(),
                        phase: spec.phase,
                    });
                }
            }
        }
        Ok(())
    }
}

fn index_of(profiles: &[SpeciesProfile]) -> HashMap<String, usize> {
    profiles
        .iter()
        .enumerate()
        .map(|(i, profile)| (profile.id.clone(), i))
        .collect()
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_profile(profile: &SpeciesProfile) -> Result<(), CatalogError> {
    if profile.id.trim().is_empty() {
        return Err(CatalogError::invalid(profile, "species id is blank"));
    }
    if !is_positive(profile.default_weight_kg) {
        return Err(CatalogError::invalid(
            profile,
            format!(
                "default weight must be positive, got {}",
                profile.default_weight_kg
            ),
        ));
    }

    let forage = profile.forage;
    if !forage.fs_max.is_finite() || !(0.0..=1.0).contains(&forage.fs_max) {
        return Err(CatalogError::invalid(profile, "fs_max must lie in [0, 1]"));
    }
    if !forage.k.is_finite() || forage.k < 0.0 {
        return Err(CatalogError::invalid(profile, "forage rate k must be >= 0"));
    }

    validate_phases(profile)?;

    if let Some(bounds) = profile.reproduction_bounds {
        let rates_ok = bounds.laying_rate_min.is_finite()
            && bounds.laying_rate_max.is_finite()
            && 0.0 <= bounds.laying_rate_min
            && bounds.laying_rate_min <= bounds.laying_rate_max
            && bounds.laying_rate_max <= 1.0;
        if !rates_ok {
            return Err(CatalogError::invalid(
                profile,
                "laying rate bounds must be ordered within [0, 1]",
            ));
        }
        let eggs_ok = bounds.egg_weight_min_g.is_finite()
            && bounds.egg_weight_max_g.is_finite()
            && 0.0 <= bounds.egg_weight_min_g
            && bounds.egg_weight_min_g <= bounds.egg_weight_max_g;
        if !eggs_ok {
            return Err(CatalogError::invalid(
                profile,
                "egg weight bounds must be ordered and non-negative",
            ));
        }
    }

    if let Some(coefficient) = profile.maintenance_coefficient {
        if !is_positive(coefficient) {
            return Err(CatalogError::invalid(
                profile,
                "maintenance coefficient override must be positive",
            ));
        }
    }
    if let Some(activity) = profile.activity {
        if !is_positive(activity.stable) || !is_positive(activity.pasture) {
            return Err(CatalogError::invalid(
                profile,
                "activity multipliers must be positive",
            ));
        }
    }

    Ok(())
}

fn validate_phases(profile: &SpeciesProfile) -> Result<(), CatalogError> {
    if profile.diet_phases.is_empty() {
        return Err(CatalogError::invalid(profile, "no diet phases declared"));
    }

    let mut seen = HashSet::new();
    for spec in &profile.diet_phases {
        if !seen.insert(spec.phase) {
            return Err(CatalogError::invalid(
                profile,
                format!("diet phase '{}' declared twice", spec.phase),
            ));
        }
        if let Some(me) = spec.me_kcal_per_kg {
            if !is_positive(me) {
                return Err(CatalogError::invalid(
                    profile,
                    format!("energy density of phase '{}' must be positive", spec.phase),
                ));
            }
        }
    }

    if let Some(phase) = profile.defaults.phase {
        if !profile.declares_phase(phase) {
            return Err(CatalogError::invalid(
                profile,
                format!("default phase '{phase}' is not declared"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flockfeed_core::{
        ForageCapacity, ReproductionBounds, Sex, SpeciesDefaults, SpeciesGroup,
    };

    fn quail() -> SpeciesProfile {
        SpeciesProfile {
            id: "quail".into(),
            label: "Quail".into(),
            sex: Sex::Female,
            group: SpeciesGroup::Other,
            default_weight_kg: 0.2,
            forage: ForageCapacity {
                fs_max: 0.1,
                k: 0.1,
            },
            diet_phases: vec![DietPhaseSpec {
                phase: DietPhase::Layer,
                crude_protein_min_pct: 20.0,
                calcium_pct: None,
                me_kcal_per_kg: Some(2850.0),
            }],
            reproduction_bounds: None,
            defaults: SpeciesDefaults::default(),
            maintenance_coefficient: None,
            activity: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = SpeciesCatalog::builtin();
        let revalidated = SpeciesCatalog::from_profiles(catalog.species().cloned().collect());
        assert!(revalidated.is_ok());
        assert!(catalog
            .check_energy_coverage(&ModelConstants::default())
            .is_ok());
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_lookup_unknown_species() {
        let err = SpeciesCatalog::builtin().lookup("emu").unwrap_err();
        assert_eq!(err, EngineError::unknown_species("emu"));
    }

    #[test]
    fn test_default_phases() {
        let catalog = SpeciesCatalog::builtin();
        assert_eq!(
            catalog.default_diet_phase("layer_hen").unwrap(),
            DietPhase::Layer
        );
        assert_eq!(
            catalog.default_diet_phase("rooster").unwrap(),
            DietPhase::AllFlock
        );
        assert_eq!(
            catalog.default_diet_phase("turkey_hen").unwrap(),
            DietPhase::Adult
        );
        assert_eq!(
            catalog.default_diet_phase("peacock").unwrap(),
            DietPhase::OrnamentalAdult
        );
    }

    #[test]
    fn test_resolve_diet_spec_falls_back_to_default() {
        let catalog = SpeciesCatalog::builtin();
        let spec = catalog
            .resolve_diet_spec("peacock", DietPhase::Layer)
            .unwrap();
        assert_eq!(spec.phase, DietPhase::OrnamentalAdult);

        let spec = catalog
            .resolve_diet_spec("layer_hen", DietPhase::Grower)
            .unwrap();
        assert_eq!(spec.phase, DietPhase::Grower);
    }

    #[test]
    fn test_from_profiles_rejects_duplicates() {
        let result = SpeciesCatalog::from_profiles(vec![quail(), quail()]);
        assert!(matches!(result, Err(CatalogError::DuplicateSpecies(id)) if id == "quail"));
    }

    #[test]
    fn test_from_profiles_rejects_empty_phase_list() {
        let mut bird = quail();
        bird.diet_phases.clear();
        let result = SpeciesCatalog::from_profiles(vec![bird]);
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_from_profiles_rejects_undeclared_default() {
        let mut bird = quail();
        bird.defaults.phase = Some(DietPhase::Starter);
        assert!(SpeciesCatalog::from_profiles(vec![bird]).is_err());
    }

    #[test]
    fn test_from_profiles_rejects_inverted_bounds() {
        let mut bird = quail();
        bird.reproduction_bounds = Some(ReproductionBounds {
            laying_rate_min: 0.8,
            laying_rate_max: 0.2,
            egg_weight_min_g: 8.0,
            egg_weight_max_g: 14.0,
        });
        assert!(SpeciesCatalog::from_profiles(vec![bird]).is_err());
    }

    #[test]
    fn test_from_profiles_rejects_bad_forage() {
        let mut bird = quail();
        bird.forage.fs_max = 1.5;
        assert!(SpeciesCatalog::from_profiles(vec![bird]).is_err());

        let mut bird = quail();
        bird.forage.k = -0.1;
        assert!(SpeciesCatalog::from_profiles(vec![bird]).is_err());
    }

    #[test]
    fn test_from_json_str_round_trips_profile() {
        let json = serde_json::to_string(&vec![quail()]).unwrap();
        let catalog = SpeciesCatalog::from_json_str(&json).unwrap();
        assert!(catalog.contains("quail"));
        assert_eq!(catalog.lookup("quail").unwrap().label, "Quail");
    }

    #[test]
    fn test_energy_coverage_detects_gap() {
        let mut constants = ModelConstants::default();
        constants.energy_density_fallbacks.remove(&DietPhase::AllFlock);
        let err = SpeciesCatalog::builtin()
            .check_energy_coverage(&constants)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingEnergyDensity {
                species_id: "generic".into(),
                phase: DietPhase::AllFlock,
            }
        );
    }
}
