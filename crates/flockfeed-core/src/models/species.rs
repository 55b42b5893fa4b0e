// ABOUTME: Species profile and diet phase models for the static species catalog
// ABOUTME: Defines sex and group categories, forage capacity, reproduction bounds, and phase specs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use crate::constants::forage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex category of a species entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male birds (roosters, toms, peacocks)
    Male,
    /// Female birds (hens, peahens)
    Female,
    /// Mixed or unsexed groups
    Mixed,
}

/// Taxonomic group, used for group-specific advisory thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesGroup {
    /// Chickens, including bantams
    ChickenLike,
    /// Turkeys
    TurkeyLike,
    /// Everything else (peafowl, mixed poultry)
    Other,
}

impl SpeciesGroup {
    /// Forage fraction above which a dependency alert is raised
    ///
    /// Returns `None` for groups without a ceiling.
    #[must_use]
    pub const fn forage_alert_threshold(self) -> Option<f64> {
        match self {
            Self::ChickenLike => Some(forage::CHICKEN_ALERT_FRACTION),
            Self::TurkeyLike => Some(forage::TURKEY_ALERT_FRACTION),
            Self::Other => None,
        }
    }
}

/// Named nutritional regimen a species can be fed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DietPhase {
    /// Chick starter crumble
    Starter,
    /// Grower ration for pullets and young stock
    Grower,
    /// Finisher ration for meat birds
    Finisher,
    /// Egg-laying ration (high calcium)
    Layer,
    /// Breeder ration for birds producing hatching eggs
    Breeder,
    /// All-flock ration, safe for mixed sexes
    #[serde(alias = "allflock", alias = "all-flock")]
    AllFlock,
    /// Maintenance ration for adult birds
    #[serde(alias = "adulto")]
    Adult,
    /// Maintenance ration for adult ornamental birds
    #[serde(alias = "ornamental-adult", alias = "gamebird_adulto")]
    OrnamentalAdult,
}

impl DietPhase {
    /// All phases, in catalog display order
    pub const ALL: [Self; 8] = [
        Self::Starter,
        Self::Grower,
        Self::Finisher,
        Self::Layer,
        Self::Breeder,
        Self::AllFlock,
        Self::Adult,
        Self::OrnamentalAdult,
    ];

    /// Stable snake_case identifier, matching the serialized form
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Grower => "grower",
            Self::Finisher => "finisher",
            Self::Layer => "layer",
            Self::Breeder => "breeder",
            Self::AllFlock => "all_flock",
            Self::Adult => "adult",
            Self::OrnamentalAdult => "ornamental_adult",
        }
    }

    /// Human-readable label for reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Grower => "Grower",
            Self::Finisher => "Finisher",
            Self::Layer => "Layer",
            Self::Breeder => "Breeder",
            Self::AllFlock => "All-flock",
            Self::Adult => "Adult",
            Self::OrnamentalAdult => "Ornamental adult",
        }
    }

    /// Whether this is the egg-laying (high calcium) ration
    #[must_use]
    pub const fn is_egg_laying(self) -> bool {
        matches!(self, Self::Layer)
    }
}

impl fmt::Display for DietPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DietPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "grower" => Ok(Self::Grower),
            "finisher" => Ok(Self::Finisher),
            "layer" => Ok(Self::Layer),
            "breeder" => Ok(Self::Breeder),
            "all_flock" | "allflock" | "all-flock" => Ok(Self::AllFlock),
            "adult" | "adulto" => Ok(Self::Adult),
            "ornamental_adult" | "ornamental-adult" | "gamebird_adulto" => {
                Ok(Self::OrnamentalAdult)
            }
            other => Err(format!(
                "Unknown diet phase: '{other}'. Valid options: starter, grower, finisher, layer, breeder, all_flock, adult, ornamental_adult"
            )),
        }
    }
}

/// Inclusive calcium percentage range of a ration (informational)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalciumRange {
    /// Lower bound (% of ration)
    pub min_pct: f64,
    /// Upper bound (% of ration)
    pub max_pct: f64,
}

/// One nutritional regimen a species can be fed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPhaseSpec {
    /// Phase identifier
    pub phase: DietPhase,
    /// Minimum crude protein (% of ration), informational
    pub crude_protein_min_pct: f64,
    /// Calcium range (% of ration), informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium_pct: Option<CalciumRange>,
    /// Metabolizable energy density (kcal/kg)
    ///
    /// When absent the engine falls back to the phase-keyed default table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub me_kcal_per_kg: Option<f64>,
}

/// Pasture foraging capacity: saturating exponential toward `fs_max`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForageCapacity {
    /// Maximum fraction of feed that pasture can ever displace (0-1)
    pub fs_max: f64,
    /// Approach rate toward `fs_max` per hour of pasture access
    pub k: f64,
}

/// Species-specific hard limits on reproduction inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReproductionBounds {
    /// Lowest laying rate (eggs per bird per day)
    pub laying_rate_min: f64,
    /// Highest laying rate (eggs per bird per day)
    pub laying_rate_max: f64,
    /// Lightest egg (grams)
    pub egg_weight_min_g: f64,
    /// Heaviest egg (grams)
    pub egg_weight_max_g: f64,
}

impl ReproductionBounds {
    /// Bounds that pin both laying rate and egg weight to zero (males)
    pub const NON_LAYING: Self = Self {
        laying_rate_min: 0.0,
        laying_rate_max: 0.0,
        egg_weight_min_g: 0.0,
        egg_weight_max_g: 0.0,
    };

    /// Clamp a laying rate into these bounds
    #[must_use]
    pub fn clamp_laying_rate(&self, rate: f64) -> f64 {
        rate.clamp(self.laying_rate_min, self.laying_rate_max)
    }

    /// Clamp an egg weight into these bounds
    #[must_use]
    pub fn clamp_egg_weight(&self, grams: f64) -> f64 {
        grams.clamp(self.egg_weight_min_g, self.egg_weight_max_g)
    }
}

/// Fallback values used when the caller leaves a field unset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SpeciesDefaults {
    /// Default diet phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<DietPhase>,
    /// Default laying rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laying_rate: Option<f64>,
    /// Default egg weight (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egg_weight_g: Option<f64>,
}

/// Activity multipliers for housed versus ranging birds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityProfile {
    /// Multiplier when the flock has no pasture access
    pub stable: f64,
    /// Multiplier when the flock ranges on pasture
    pub pasture: f64,
}

impl ActivityProfile {
    /// Pick the multiplier for the given daily pasture access
    #[must_use]
    pub fn for_pasture_hours(&self, pasture_hours: f64) -> f64 {
        if pasture_hours > 0.0 {
            self.pasture
        } else {
            self.stable
        }
    }
}

/// Static nutritional reference data for one species entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesProfile {
    /// Catalog key
    pub id: String,
    /// Display label
    pub label: String,
    /// Sex category
    pub sex: Sex,
    /// Taxonomic group
    pub group: SpeciesGroup,
    /// Live weight used when the caller supplies none (kg)
    pub default_weight_kg: f64,
    /// Pasture foraging capacity
    pub forage: ForageCapacity,
    /// Declared diet phases, in preference order
    pub diet_phases: Vec<DietPhaseSpec>,
    /// Species-specific reproduction limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reproduction_bounds: Option<ReproductionBounds>,
    /// Fallback phase, laying rate, and egg weight
    #[serde(default)]
    pub defaults: SpeciesDefaults,
    /// Species override of the maintenance coefficient (kcal / kg^0.75)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_coefficient: Option<f64>,
    /// Stable/pasture activity multipliers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityProfile>,
}

impl SpeciesProfile {
    /// Spec for a phase, if the species declares it
    #[must_use]
    pub fn diet_spec(&self, phase: DietPhase) -> Option<&DietPhaseSpec> {
        self.diet_phases.iter().find(|spec| spec.phase == phase)
    }

    /// Whether the species declares the given phase
    #[must_use]
    pub fn declares_phase(&self, phase: DietPhase) -> bool {
        self.diet_spec(phase).is_some()
    }

    /// Default phase: the declared default if it is declared, else the first phase
    #[must_use]
    pub fn default_phase(&self) -> Option<DietPhase> {
        self.defaults
            .phase
            .filter(|phase| self.declares_phase(*phase))
            .or_else(|| self.diet_phases.first().map(|spec| spec.phase))
    }

    /// Whether the species is male-typed
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(phase: DietPhase) -> DietPhaseSpec {
        DietPhaseSpec {
            phase,
            crude_protein_min_pct: 16.0,
            calcium_pct: None,
            me_kcal_per_kg: Some(2800.0),
        }
    }

    fn profile(phases: Vec<DietPhaseSpec>, default: Option<DietPhase>) -> SpeciesProfile {
        SpeciesProfile {
            id: "test_hen".into(),
            label: "Test hen".into(),
            sex: Sex::Female,
            group: SpeciesGroup::ChickenLike,
            default_weight_kg: 1.8,
            forage: ForageCapacity { fs_max: 0.3, k: 0.1 },
            diet_phases: phases,
            reproduction_bounds: None,
            defaults: SpeciesDefaults {
                phase: default,
                ..SpeciesDefaults::default()
            },
            maintenance_coefficient: None,
            activity: None,
        }
    }

    #[test]
    fn test_diet_phase_parsing_accepts_legacy_spellings() {
        assert_eq!("allflock".parse::<DietPhase>(), Ok(DietPhase::AllFlock));
        assert_eq!("All-Flock".parse::<DietPhase>(), Ok(DietPhase::AllFlock));
        assert_eq!("adulto".parse::<DietPhase>(), Ok(DietPhase::Adult));
        assert_eq!(
            "gamebird_adulto".parse::<DietPhase>(),
            Ok(DietPhase::OrnamentalAdult)
        );
        assert!("pellets".parse::<DietPhase>().is_err());
    }

    #[test]
    fn test_diet_phase_serde_matches_code() {
        for phase in DietPhase::ALL {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase.code()));
            assert_eq!(phase.code().parse::<DietPhase>(), Ok(phase));
        }
    }

    #[test]
    fn test_default_phase_prefers_declared_default() {
        let hen = profile(
            vec![phase(DietPhase::AllFlock), phase(DietPhase::Layer)],
            Some(DietPhase::Layer),
        );
        assert_eq!(hen.default_phase(), Some(DietPhase::Layer));
    }

    #[test]
    fn test_default_phase_ignores_undeclared_default() {
        let hen = profile(vec![phase(DietPhase::Grower)], Some(DietPhase::Layer));
        assert_eq!(hen.default_phase(), Some(DietPhase::Grower));

        let empty = profile(Vec::new(), Some(DietPhase::Layer));
        assert_eq!(empty.default_phase(), None);
    }

    #[test]
    fn test_forage_thresholds_by_group() {
        assert_eq!(
            SpeciesGroup::ChickenLike.forage_alert_threshold(),
            Some(0.20)
        );
        assert_eq!(SpeciesGroup::TurkeyLike.forage_alert_threshold(), Some(0.25));
        assert_eq!(SpeciesGroup::Other.forage_alert_threshold(), None);
    }

    #[test]
    fn test_activity_profile_switches_on_pasture() {
        let activity = ActivityProfile {
            stable: 1.0,
            pasture: 1.15,
        };
        assert!((activity.for_pasture_hours(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((activity.for_pasture_hours(4.0) - 1.15).abs() < f64::EPSILON);
    }
}
