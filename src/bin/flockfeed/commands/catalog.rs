// ABOUTME: Catalog listing command for the flockfeed CLI
// ABOUTME: Prints each species with weight, forage capacity, and declared diet phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

use flockfeed_engine::SpeciesCatalog;

/// Print every species of the catalog
pub fn list(catalog: &SpeciesCatalog) {
    for profile in catalog.species() {
        let default_phase = profile.default_phase();
        println!(
            "{} ({}) - {:.1} kg, forage up to {:.0}%",
            profile.label,
            profile.id,
            profile.default_weight_kg,
            profile.forage.fs_max * 100.0
        );
        for spec in &profile.diet_phases {
            let marker = if Some(spec.phase) == default_phase { "*" } else { " " };
            let energy = spec
                .me_kcal_per_kg
                .map_or_else(|| "default ME".to_owned(), |me| format!("{me:.0} kcal/kg"));
            println!(
                "  {marker} {:<18} CP >= {:>4.1}%  {energy}",
                spec.phase.label(),
                spec.crude_protein_min_pct
            );
        }
    }
}
