// ABOUTME: Integration tests for the CSV feeding plan
// ABOUTME: Renders real flock results and checks header, row layout, and quoting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::reference_hen;
use flockfeed::report::{to_csv_string, write_csv, CSV_HEADER};
use flockfeed::{
    compute_flock_intake, BirdInput, DietPhase, Environment, ModelConstants, SpeciesCatalog,
};

mod common;

fn hot_farm() -> Environment {
    Environment {
        temperature_c: 33.0,
        pasture_hours: 6.0,
        pasture_quality: 0.8,
        total_area_m2: 30.0,
        bird_count: None,
    }
}

#[test]
fn test_plan_rows_per_group() {
    let birds = vec![
        reference_hen(),
        reference_hen(),
        BirdInput::new("rooster").with_diet_phase(DietPhase::Layer),
    ];
    let result = compute_flock_intake(
        SpeciesCatalog::builtin(),
        &birds,
        &hot_farm(),
        &ModelConstants::default(),
        None,
    )
    .unwrap();

    let csv = to_csv_string(&result.groups).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(
        lines[0],
        "species,phase,diet_label,quantity,feed_g_per_bird,feed_g_total,water_L_per_bird,water_L_total,forage_pct,alerts"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Laying hen,layer,Layer,2,98,196,0.36,0.72,10.5,"));
    assert!(lines[2].starts_with("Rooster,layer,Layer,1,"));
    assert!(lines[2].contains("Layer diet is inappropriate for males"));
    assert!(lines[2].contains(" | Heat: increase water"));
    assert!(csv.ends_with('\n'));
    assert!(!csv.contains('\r'));
}

#[test]
fn test_write_csv_to_writer() {
    let mut buffer = Vec::new();
    write_csv(&[], &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
}
