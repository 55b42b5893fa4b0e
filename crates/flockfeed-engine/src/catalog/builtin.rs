// ABOUTME: Built-in species reference table for common small-farm poultry
// ABOUTME: Chickens, bantams, turkeys, peafowl, and a generic entry for anything else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use flockfeed_core::{
    CalciumRange, DietPhase, DietPhaseSpec, ForageCapacity, ReproductionBounds, Sex,
    SpeciesDefaults, SpeciesGroup, SpeciesProfile,
};

/// Approach rate shared by all built-in species (per hour of pasture)
const FORAGE_RATE_K: f64 = 0.10;

const LAYER_CALCIUM: CalciumRange = CalciumRange {
    min_pct: 3.5,
    max_pct: 4.5,
};

const ALL_FLOCK_CALCIUM: CalciumRange = CalciumRange {
    min_pct: 1.0,
    max_pct: 1.0,
};

const BREEDER_CALCIUM: CalciumRange = CalciumRange {
    min_pct: 2.5,
    max_pct: 3.0,
};

const fn spec(
    phase: DietPhase,
    crude_protein_min_pct: f64,
    calcium_pct: Option<CalciumRange>,
    me_kcal_per_kg: Option<f64>,
) -> DietPhaseSpec {
    DietPhaseSpec {
        phase,
        crude_protein_min_pct,
        calcium_pct,
        me_kcal_per_kg,
    }
}

const fn forage(fs_max: f64) -> ForageCapacity {
    ForageCapacity {
        fs_max,
        k: FORAGE_RATE_K,
    }
}

fn defaults_phase(phase: DietPhase) -> SpeciesDefaults {
    SpeciesDefaults {
        phase: Some(phase),
        ..SpeciesDefaults::default()
    }
}

struct Entry {
    id: &'static str,
    label: &'static str,
    sex: Sex,
    group: SpeciesGroup,
    weight_kg: f64,
    fs_max: f64,
}

impl Entry {
    fn into_profile(
        self,
        diet_phases: Vec<DietPhaseSpec>,
        reproduction_bounds: ReproductionBounds,
        defaults: SpeciesDefaults,
    ) -> SpeciesProfile {
        SpeciesProfile {
            id: self.id.to_owned(),
            label: self.label.to_owned(),
            sex: self.sex,
            group: self.group,
            default_weight_kg: self.weight_kg,
            forage: forage(self.fs_max),
            diet_phases,
            reproduction_bounds: Some(reproduction_bounds),
            defaults,
            maintenance_coefficient: None,
            activity: None,
        }
    }
}

/// The built-in species, in display order
pub(super) fn profiles() -> Vec<SpeciesProfile> {
    vec![
        layer_hen(),
        rooster(),
        bantam_hen(),
        bantam_rooster(),
        turkey_hen(),
        turkey_tom(),
        peahen(),
        peacock(),
        generic(),
    ]
}

fn layer_hen() -> SpeciesProfile {
    Entry {
        id: "layer_hen",
        label: "Laying hen",
        sex: Sex::Female,
        group: SpeciesGroup::ChickenLike,
        weight_kg: 1.8,
        fs_max: 0.29,
    }
    .into_profile(
        vec![
            spec(DietPhase::Layer, 16.0, Some(LAYER_CALCIUM), Some(2800.0)),
            spec(DietPhase::AllFlock, 18.0, Some(ALL_FLOCK_CALCIUM), Some(2900.0)),
            spec(DietPhase::Grower, 16.0, None, Some(2950.0)),
            spec(DietPhase::Starter, 20.0, None, Some(2900.0)),
        ],
        ReproductionBounds {
            laying_rate_min: 0.0,
            laying_rate_max: 0.95,
            egg_weight_min_g: 40.0,
            egg_weight_max_g: 75.0,
        },
        SpeciesDefaults {
            phase: Some(DietPhase::Layer),
            laying_rate: Some(0.75),
            egg_weight_g: Some(58.0),
        },
    )
}

fn rooster() -> SpeciesProfile {
    Entry {
        id: "rooster",
        label: "Rooster",
        sex: Sex::Male,
        group: SpeciesGroup::ChickenLike,
        weight_kg: 3.0,
        fs_max: 0.40,
    }
    .into_profile(
        vec![
            spec(DietPhase::AllFlock, 18.0, Some(ALL_FLOCK_CALCIUM), Some(2900.0)),
            spec(DietPhase::Layer, 16.0, Some(LAYER_CALCIUM), Some(2800.0)),
            spec(DietPhase::Grower, 16.0, None, Some(2950.0)),
        ],
        ReproductionBounds::NON_LAYING,
        defaults_phase(DietPhase::AllFlock),
    )
}

fn bantam_hen() -> SpeciesProfile {
    Entry {
        id: "bantam_hen",
        label: "Bantam hen",
        sex: Sex::Female,
        group: SpeciesGroup::ChickenLike,
        weight_kg: 1.0,
        fs_max: 0.37,
    }
    .into_profile(
        vec![
            spec(DietPhase::Layer, 16.0, Some(LAYER_CALCIUM), Some(2800.0)),
            spec(DietPhase::AllFlock, 18.0, Some(ALL_FLOCK_CALCIUM), Some(2900.0)),
        ],
        ReproductionBounds {
            laying_rate_min: 0.0,
            laying_rate_max: 0.6,
            egg_weight_min_g: 25.0,
            egg_weight_max_g: 38.0,
        },
        SpeciesDefaults {
            phase: Some(DietPhase::Layer),
            laying_rate: Some(0.5),
            egg_weight_g: Some(35.0),
        },
    )
}

fn bantam_rooster() -> SpeciesProfile {
    Entry {
        id: "bantam_rooster",
        label: "Bantam rooster",
        sex: Sex::Male,
        group: SpeciesGroup::ChickenLike,
        weight_kg: 1.2,
        fs_max: 0.40,
    }
    .into_profile(
        vec![
            spec(DietPhase::AllFlock, 18.0, Some(ALL_FLOCK_CALCIUM), Some(2900.0)),
            spec(DietPhase::Layer, 16.0, Some(LAYER_CALCIUM), Some(2800.0)),
        ],
        ReproductionBounds::NON_LAYING,
        defaults_phase(DietPhase::AllFlock),
    )
}

fn turkey_hen() -> SpeciesProfile {
    Entry {
        id: "turkey_hen",
        label: "Turkey hen",
        sex: Sex::Female,
        group: SpeciesGroup::TurkeyLike,
        weight_kg: 6.0,
        fs_max: 0.46,
    }
    .into_profile(
        vec![
            spec(DietPhase::Adult, 14.0, None, Some(3000.0)),
            spec(DietPhase::Breeder, 16.0, Some(BREEDER_CALCIUM), Some(2850.0)),
            spec(DietPhase::Starter, 28.0, None, Some(2900.0)),
            spec(DietPhase::Grower, 22.0, None, Some(3000.0)),
        ],
        ReproductionBounds {
            laying_rate_min: 0.0,
            laying_rate_max: 0.5,
            egg_weight_min_g: 70.0,
            egg_weight_max_g: 100.0,
        },
        defaults_phase(DietPhase::Adult),
    )
}

fn turkey_tom() -> SpeciesProfile {
    Entry {
        id: "turkey_tom",
        label: "Turkey tom",
        sex: Sex::Male,
        group: SpeciesGroup::TurkeyLike,
        weight_kg: 10.0,
        fs_max: 0.46,
    }
    .into_profile(
        vec![
            spec(DietPhase::Adult, 14.0, None, Some(3000.0)),
            spec(DietPhase::Finisher, 16.0, None, Some(3100.0)),
            spec(DietPhase::Grower, 22.0, None, Some(3000.0)),
        ],
        ReproductionBounds::NON_LAYING,
        defaults_phase(DietPhase::Adult),
    )
}

fn peahen() -> SpeciesProfile {
    Entry {
        id: "peahen",
        label: "Peahen",
        sex: Sex::Female,
        group: SpeciesGroup::Other,
        weight_kg: 3.5,
        fs_max: 0.45,
    }
    .into_profile(
        vec![
            spec(DietPhase::OrnamentalAdult, 20.0, None, Some(3000.0)),
            spec(DietPhase::Breeder, 20.0, Some(BREEDER_CALCIUM), Some(2850.0)),
            spec(DietPhase::Starter, 28.0, None, Some(2900.0)),
        ],
        ReproductionBounds {
            laying_rate_min: 0.0,
            laying_rate_max: 0.3,
            egg_weight_min_g: 85.0,
            egg_weight_max_g: 110.0,
        },
        defaults_phase(DietPhase::OrnamentalAdult),
    )
}

fn peacock() -> SpeciesProfile {
    Entry {
        id: "peacock",
        label: "Peacock",
        sex: Sex::Male,
        group: SpeciesGroup::Other,
        weight_kg: 4.5,
        fs_max: 0.45,
    }
    .into_profile(
        vec![
            spec(DietPhase::OrnamentalAdult, 20.0, None, Some(3000.0)),
            spec(DietPhase::Starter, 28.0, None, Some(2900.0)),
        ],
        ReproductionBounds::NON_LAYING,
        defaults_phase(DietPhase::OrnamentalAdult),
    )
}

// Energy density left to the phase fallback table.
fn generic() -> SpeciesProfile {
    Entry {
        id: "generic",
        label: "Other poultry",
        sex: Sex::Mixed,
        group: SpeciesGroup::Other,
        weight_kg: 2.0,
        fs_max: 0.30,
    }
    .into_profile(
        vec![spec(DietPhase::AllFlock, 16.0, None, None)],
        ReproductionBounds {
            laying_rate_min: 0.0,
            laying_rate_max: 1.0,
            egg_weight_min_g: 0.0,
            egg_weight_max_g: 100.0,
        },
        defaults_phase(DietPhase::AllFlock),
    )
}
