// ABOUTME: Data gap detection for missing or thin diagnostic evidence
// ABOUTME: Primary lift missing, absent secondaries, clamped rep counts, empty session flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::e1rm::clamped_snapshot_count;
use crate::config::LiftConfig;
use barpath_core::constants::e1rm::MAX_REPS_FOR_ESTIMATE;
use barpath_core::models::{DiagnosticEngineInput, E1rmResult};
use std::collections::BTreeMap;

/// One kind of missing or thin evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataGap {
    /// No snapshot for the primary exercise
    PrimaryMissing {
        /// Primary exercise id
        exercise_id: String,
    },
    /// Declared secondaries with no snapshot
    SecondariesMissing {
        /// Missing exercise ids in declaration order
        exercise_ids: Vec<String>,
    },
    /// Snapshots whose reps exceeded the estimate clamp
    RepsClamped {
        /// Number of affected snapshots
        count: usize,
    },
    /// No session flags were reported
    FlagsEmpty,
}

impl DataGap {
    /// Stable key used for efficiency deductions
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::PrimaryMissing { .. } => "primary_missing",
            Self::SecondariesMissing { .. } => "secondaries_missing",
            Self::RepsClamped { .. } => "reps_clamped",
            Self::FlagsEmpty => "flags_empty",
        }
    }

    /// Human-readable description reported in `data_gaps`
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::PrimaryMissing { exercise_id } => format!(
                "No snapshot for primary lift '{exercise_id}'; ratio indices could not be computed"
            ),
            Self::SecondariesMissing { exercise_ids } => format!(
                "Missing secondary lifts: {}; their ratio evidence is unavailable",
                exercise_ids.join(", ")
            ),
            Self::RepsClamped { count } => format!(
                "{count} snapshot(s) exceeded {MAX_REPS_FOR_ESTIMATE} reps; those estimates are clamped and low confidence"
            ),
            Self::FlagsEmpty => {
                "No session flags reported; hypotheses were scored from ratios only".to_owned()
            }
        }
    }
}

/// Detect every gap kind, in a fixed order
#[must_use]
pub fn detect(
    lift: &LiftConfig,
    input: &DiagnosticEngineInput,
    e1rms: &BTreeMap<String, E1rmResult>,
) -> Vec<DataGap> {
    let primary = input.primary_exercise();
    let mut gaps = Vec::new();

    if !e1rms.contains_key(primary) {
        gaps.push(DataGap::PrimaryMissing {
            exercise_id: primary.to_owned(),
        });
    }

    let missing: Vec<String> = lift
        .secondaries
        .iter()
        .filter(|secondary| {
            secondary.exercise_id != primary && !e1rms.contains_key(&secondary.exercise_id)
        })
        .map(|secondary| secondary.exercise_id.clone())
        .collect();
    if !missing.is_empty() {
        gaps.push(DataGap::SecondariesMissing {
            exercise_ids: missing,
        });
    }

    let clamped = clamped_snapshot_count(&input.snapshots);
    if clamped > 0 {
        gaps.push(DataGap::RepsClamped { count: clamped });
    }

    if input.flags.is_empty() {
        gaps.push(DataGap::FlagsEmpty);
    }
    gaps
}
