// ABOUTME: Mapping of stored animal records onto intake calculator inputs
// ABOUTME: Resolves species ids from animal kinds and drops inactive or undeclared-phase data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! Inventory mapping
//!
//! Farm inventories record individual animals by kind and status. Only
//! active animals eat, and each one becomes exactly one `BirdInput`.

use flockfeed_core::{BirdInput, DietPhase};
use flockfeed_engine::SpeciesCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Species used when neither the record nor its kind resolves
pub const FALLBACK_SPECIES_ID: &str = "layer_hen";

/// Kind of animal as recorded in the inventory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    /// Laying hen
    #[serde(alias = "gallina")]
    Hen,
    /// Rooster
    #[serde(alias = "gallo")]
    Rooster,
    /// Bantam hen
    #[serde(alias = "kika")]
    BantamHen,
    /// Bantam rooster
    #[serde(alias = "kiko")]
    BantamRooster,
    /// Meat chicken
    #[serde(alias = "pollo")]
    Broiler,
    /// Chick of any chicken breed
    #[serde(alias = "pollito")]
    Chick,
    /// Female turkey
    #[serde(alias = "pavo_hembra")]
    TurkeyHen,
    /// Male turkey
    #[serde(alias = "pavo_macho")]
    TurkeyTom,
    /// Female peafowl
    #[serde(alias = "pavoreal_hembra")]
    Peahen,
    /// Male peafowl
    #[serde(alias = "pavoreal_macho")]
    Peacock,
    /// Anything else
    #[serde(alias = "otro")]
    Other,
}

impl AnimalKind {
    /// Catalog species a record of this kind maps to by default
    #[must_use]
    pub const fn default_species_id(self) -> &'static str {
        match self {
            Self::Hen | Self::Chick => "layer_hen",
            Self::Rooster => "rooster",
            Self::BantamHen => "bantam_hen",
            Self::BantamRooster => "bantam_rooster",
            Self::TurkeyHen => "turkey_hen",
            Self::TurkeyTom => "turkey_tom",
            Self::Peahen => "peahen",
            Self::Peacock => "peacock",
            Self::Broiler | Self::Other => "generic",
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hen => "hen",
            Self::Rooster => "rooster",
            Self::BantamHen => "bantam_hen",
            Self::BantamRooster => "bantam_rooster",
            Self::Broiler => "broiler",
            Self::Chick => "chick",
            Self::TurkeyHen => "turkey_hen",
            Self::TurkeyTom => "turkey_tom",
            Self::Peahen => "peahen",
            Self::Peacock => "peacock",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hen" | "gallina" => Ok(Self::Hen),
            "rooster" | "gallo" => Ok(Self::Rooster),
            "bantam_hen" | "kika" => Ok(Self::BantamHen),
            "bantam_rooster" | "kiko" => Ok(Self::BantamRooster),
            "broiler" | "pollo" => Ok(Self::Broiler),
            "chick" | "pollito" => Ok(Self::Chick),
            "turkey_hen" | "pavo_hembra" => Ok(Self::TurkeyHen),
            "turkey_tom" | "pavo_macho" => Ok(Self::TurkeyTom),
            "peahen" | "pavoreal_hembra" => Ok(Self::Peahen),
            "peacock" | "pavoreal_macho" => Ok(Self::Peacock),
            "other" | "otro" => Ok(Self::Other),
            other => Err(format!(
                "Unknown animal kind: '{other}'. Valid options: hen, rooster, bantam_hen, bantam_rooster, broiler, chick, turkey_hen, turkey_tom, peahen, peacock, other"
            )),
        }
    }
}

/// Lifecycle status of an inventory record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnimalStatus {
    /// Still on the farm and eating
    #[default]
    Active,
    /// Sold
    Sold,
    /// Dead
    Dead,
}

/// One stored animal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalRecord {
    /// Record id
    pub id: String,
    /// Recorded kind
    pub kind: AnimalKind,
    /// Explicit catalog species, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_id: Option<String>,
    /// Leg band or other tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: AnimalStatus,
    /// Live weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Diet phase currently fed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_phase: Option<DietPhase>,
    /// Eggs per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laying_rate: Option<f64>,
    /// Egg weight (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egg_weight_g: Option<f64>,
    /// Activity multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_factor: Option<f64>,
}

impl AnimalRecord {
    /// Active record of the given kind with nothing else recorded
    pub fn new(id: impl Into<String>, kind: AnimalKind) -> Self {
        Self {
            id: id.into(),
            kind,
            species_id: None,
            tag: None,
            status: AnimalStatus::Active,
            weight_kg: None,
            diet_phase: None,
            laying_rate: None,
            egg_weight_g: None,
            activity_factor: None,
        }
    }

    /// Whether the animal is still on the farm
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AnimalStatus::Active
    }
}

/// Catalog species for a record
///
/// The explicit species id wins if the catalog knows it, then the kind's
/// default species, then [`FALLBACK_SPECIES_ID`].
#[must_use]
pub fn resolve_species_id(record: &AnimalRecord, catalog: &SpeciesCatalog) -> String {
    record
        .species_id
        .as_deref()
        .filter(|id| catalog.contains(id))
        .or_else(|| {
            let default = record.kind.default_species_id();
            catalog.contains(default).then_some(default)
        })
        .unwrap_or(FALLBACK_SPECIES_ID)
        .to_owned()
}

/// One `BirdInput` per active record
///
/// A recorded diet phase is kept only if the resolved species declares it;
/// otherwise the calculator picks the species default.
#[must_use]
pub fn bird_inputs_from_records(
    records: &[AnimalRecord],
    catalog: &SpeciesCatalog,
) -> Vec<BirdInput> {
    records
        .iter()
        .filter(|record| record.is_active())
        .map(|record| {
            let species_id = resolve_species_id(record, catalog);
            let diet_phase = record.diet_phase.filter(|phase| {
                catalog
                    .lookup(&species_id)
                    .is_ok_and(|profile| profile.declares_phase(*phase))
            });
            BirdInput {
                species_id,
                weight_kg: record.weight_kg,
                diet_phase,
                laying_rate: record.laying_rate,
                egg_weight_g: record.egg_weight_g,
                activity_factor: record.activity_factor,
            }
        })
        .collect()
}
