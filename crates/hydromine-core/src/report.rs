//! Read-only output tables for chart consumers.
//!
//! Row types are owned copies (no references into live simulation state)
//! and serialize cleanly, so a presentation layer can take them as JSON.
//! The field log is recorded wide (one row per roid per tick) and reshaped
//! into long form at read time.

use serde::{Deserialize, Serialize};

use crate::fixed::{Fixed64, MINUTE, Seconds};
use crate::strategy::MiningStatus;

/// Render a time as a zero-padded `MMmSSs` duration string.
pub fn format_duration(time: Seconds) -> String {
    format!("{:02}m{:02}s", time / MINUTE, time % MINUTE)
}

// ---------------------------------------------------------------------------
// Aggregate progress
// ---------------------------------------------------------------------------

/// One row of the aggregate progress table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRow {
    pub time: Seconds,
    pub duration: String,
    /// Artifact boosts completed so far.
    pub boosts: u32,
    /// Combined fleet tank level.
    pub tank: Fixed64,
    /// Hydro remaining across the whole field.
    pub total_hydro: Fixed64,
    pub status: MiningStatus,
}

// ---------------------------------------------------------------------------
// Field history
// ---------------------------------------------------------------------------

/// One wide field-log record: a single roid at a single tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRow {
    pub time: Seconds,
    pub duration: String,
    pub roid: String,
    pub remaining: Fixed64,
    pub collected: Fixed64,
}

/// Which of a roid's two quantities a long-form sample carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HydroKind {
    Remaining,
    Collected,
}

/// One long-form field sample: `(time, roid, kind, value)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub time: Seconds,
    pub duration: String,
    pub roid: String,
    pub kind: HydroKind,
    pub hydro: Fixed64,
}

/// Reshape the wide field log into long form: every `Remaining` sample,
/// then every `Collected` sample, each block in log order.
pub fn melt_field_rows(rows: &[FieldRow]) -> Vec<FieldSample> {
    let mut samples = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        samples.push(FieldSample {
            time: row.time,
            duration: row.duration.clone(),
            roid: row.roid.clone(),
            kind: HydroKind::Remaining,
            hydro: row.remaining,
        });
    }
    for row in rows {
        samples.push(FieldSample {
            time: row.time,
            duration: row.duration.clone(),
            roid: row.roid.clone(),
            kind: HydroKind::Collected,
            hydro: row.collected,
        });
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(format_duration(0), "00m00s");
        assert_eq!(format_duration(70), "01m10s");
        assert_eq!(format_duration(600), "10m00s");
        assert_eq!(format_duration(2405), "40m05s");
    }

    fn sample_rows() -> Vec<FieldRow> {
        vec![
            FieldRow {
                time: 0,
                duration: format_duration(0),
                roid: "r00".into(),
                remaining: Fixed64::from_num(80),
                collected: Fixed64::ZERO,
            },
            FieldRow {
                time: 10,
                duration: format_duration(10),
                roid: "r00".into(),
                remaining: Fixed64::from_num(60),
                collected: Fixed64::from_num(20),
            },
        ]
    }

    #[test]
    fn melt_emits_remaining_block_then_collected_block() {
        let samples = melt_field_rows(&sample_rows());
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].kind, HydroKind::Remaining);
        assert_eq!(samples[1].kind, HydroKind::Remaining);
        assert_eq!(samples[2].kind, HydroKind::Collected);
        assert_eq!(samples[3].kind, HydroKind::Collected);
        assert_eq!(samples[1].hydro, Fixed64::from_num(60));
        assert_eq!(samples[3].hydro, Fixed64::from_num(20));
    }

    #[test]
    fn melt_preserves_row_identity() {
        let samples = melt_field_rows(&sample_rows());
        assert_eq!(samples[2].time, 0);
        assert_eq!(samples[2].roid, "r00");
        assert_eq!(samples[2].duration, "00m00s");
    }

    #[test]
    fn rows_serialize_for_chart_consumers() {
        let row = ProgressRow {
            time: 130,
            duration: format_duration(130),
            boosts: 4,
            tank: Fixed64::from_num(250),
            total_hydro: Fixed64::from_num(9000),
            status: MiningStatus::Mining,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["duration"], "02m10s");
        assert_eq!(json["boosts"], 4);
    }
}
