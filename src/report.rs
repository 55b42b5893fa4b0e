// ABOUTME: CSV rendering of flock group summaries for spreadsheet export
// ABOUTME: Fixed header, fixed decimal places per column, alert messages joined with a pipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! CSV feeding plan
//!
//! One row per species/phase group. Quoting follows RFC 4180: fields
//! containing a comma, quote, or line break are quoted and embedded quotes
//! doubled. Records end with `\n`.

use flockfeed_core::GroupSummary;
use std::io::Write;
use thiserror::Error;

/// Column header of the feeding plan
pub const CSV_HEADER: [&str; 10] = [
    "species",
    "phase",
    "diet_label",
    "quantity",
    "feed_g_per_bird",
    "feed_g_total",
    "water_L_per_bird",
    "water_L_total",
    "forage_pct",
    "alerts",
];

/// Separator between alert messages in one cell
pub const ALERT_SEPARATOR: &str = " | ";

/// Errors raised while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization or underlying write failed
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output was not valid UTF-8
    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn row(group: &GroupSummary) -> [String; 10] {
    let alerts: Vec<&str> = group.alerts.iter().map(|alert| alert.message()).collect();
    [
        group.species_label.clone(),
        group.phase.code().to_owned(),
        group.phase.label().to_owned(),
        group.quantity.to_string(),
        format!("{:.0}", group.feed_per_bird_g),
        format!("{:.0}", group.feed_total_g),
        format!("{:.2}", group.water_per_bird_l),
        format!("{:.2}", group.water_total_l),
        format!("{:.1}", group.forage_pct),
        alerts.join(ALERT_SEPARATOR),
    ]
}

/// Write the feeding plan for the given groups
///
/// # Errors
///
/// Returns an error if writing to the underlying writer fails
pub fn write_csv<W: Write>(groups: &[GroupSummary], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for group in groups {
        csv_writer.write_record(row(group))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the feeding plan to a string
///
/// # Errors
///
/// Returns an error if CSV serialization fails
pub fn to_csv_string(groups: &[GroupSummary]) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_csv(groups, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flockfeed_core::{Alert, DietPhase};

    fn group(label: &str, alerts: Vec<Alert>) -> GroupSummary {
        GroupSummary {
            species_id: "layer_hen".into(),
            species_label: label.into(),
            phase: DietPhase::AllFlock,
            quantity: 3,
            feed_per_bird_g: 98.0,
            feed_total_g: 294.0,
            water_per_bird_l: 0.24,
            water_total_l: 0.7,
            forage_pct: 10.5,
            alerts,
        }
    }

    #[test]
    fn test_header_only_for_empty_plan() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv, format!("{}\n", CSV_HEADER.join(",")));
    }

    #[test]
    fn test_row_formatting() {
        let csv = to_csv_string(&[group("Laying hen", Vec::new())]).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "Laying hen,all_flock,All-flock,3,98,294,0.24,0.70,10.5,");
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_escaped() {
        let csv = to_csv_string(&[group("Hen, \"Silkie\"", vec![Alert::HeatStress])]).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Hen, \"\"Silkie\"\"\",all_flock"));
        assert!(line
            .ends_with("\"Heat: increase water (+30-50%), provide shade and ventilation.\""));
    }
}
