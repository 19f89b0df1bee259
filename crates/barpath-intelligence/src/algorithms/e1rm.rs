// ABOUTME: Estimated one-rep max calculation using the Epley formula with a rep clamp
// ABOUTME: Reconciles duplicate exercise snapshots by keeping the greatest estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barpath_core::constants::e1rm::{HIGH_CONFIDENCE_MAX_REPS, MAX_REPS_FOR_ESTIMATE};
use barpath_core::models::{E1rmConfidence, E1rmResult, ExerciseSnapshot};
use std::collections::BTreeMap;

/// Epley divisor as an integer so the rep term stays exact
const EPLEY_REPS_DIVISOR: u32 = 30;

/// Estimate a one-rep max from a single set
///
/// Formula: e1RM = weight x (1 + reps / 30), with reps clamped to 10
///
/// Evaluated as `weight x (30 + reps) / 30`. Exact halves round away from
/// zero (225 x 5 = 262.5 estimates 263).
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*. Lincoln, NE.
#[must_use]
pub fn estimate(weight: f64, reps: u32) -> E1rmResult {
    let reps_used = reps.min(MAX_REPS_FOR_ESTIMATE);
    let raw = weight * f64::from(EPLEY_REPS_DIVISOR + reps_used) / f64::from(EPLEY_REPS_DIVISOR);

    E1rmResult {
        value: raw.round().max(0.0) as u32,
        reps_used,
        reps_clamped: reps > MAX_REPS_FOR_ESTIMATE,
        confidence: confidence_for_reps(reps),
    }
}

/// Confidence band for the logged (unclamped) rep count
#[must_use]
pub const fn confidence_for_reps(reps: u32) -> E1rmConfidence {
    if reps <= HIGH_CONFIDENCE_MAX_REPS {
        E1rmConfidence::High
    } else if reps > MAX_REPS_FOR_ESTIMATE {
        E1rmConfidence::Low
    } else {
        E1rmConfidence::Medium
    }
}

/// One estimate per distinct exercise, keeping the greatest value
///
/// Ties keep the first snapshot encountered.
#[must_use]
pub fn best_estimates(snapshots: &[ExerciseSnapshot]) -> BTreeMap<String, E1rmResult> {
    snapshots
        .iter()
        .fold(BTreeMap::new(), |mut best, snapshot| {
            let candidate = estimate(snapshot.weight, snapshot.reps);
            best.entry(snapshot.exercise_id.clone())
                .and_modify(|current: &mut E1rmResult| {
                    if candidate.value > current.value {
                        *current = candidate;
                    }
                })
                .or_insert(candidate);
            best
        })
}

/// Number of snapshots whose reps exceeded the clamp
#[must_use]
pub fn clamped_snapshot_count(snapshots: &[ExerciseSnapshot]) -> usize {
    snapshots
        .iter()
        .filter(|snapshot| snapshot.reps > MAX_REPS_FOR_ESTIMATE)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley_medium_confidence() {
        let result = estimate(225.0, 5);

        assert_eq!(result.value, 263);
        assert_eq!(result.reps_used, 5);
        assert!(!result.reps_clamped);
        assert_eq!(result.confidence, E1rmConfidence::Medium);
    }

    #[test]
    fn test_reps_above_ten_are_clamped() {
        let result = estimate(135.0, 15);

        assert_eq!(result.value, 180);
        assert_eq!(result.reps_used, 10);
        assert!(result.reps_clamped);
        assert_eq!(result.confidence, E1rmConfidence::Low);
    }

    #[test]
    fn test_confidence_boundaries() {
        assert_eq!(confidence_for_reps(1), E1rmConfidence::High);
        assert_eq!(confidence_for_reps(4), E1rmConfidence::High);
        assert_eq!(confidence_for_reps(5), E1rmConfidence::Medium);
        assert_eq!(confidence_for_reps(10), E1rmConfidence::Medium);
        assert_eq!(confidence_for_reps(11), E1rmConfidence::Low);
    }

    #[test]
    fn test_duplicate_exercise_keeps_maximum() {
        let snapshots = vec![
            ExerciseSnapshot::new("bench_press", 200.0, 8),
            ExerciseSnapshot::new("bench_press", 225.0, 5),
        ];
        let best = best_estimates(&snapshots);

        assert_eq!(estimate(200.0, 8).value, 253);
        assert_eq!(best.len(), 1);
        assert_eq!(best["bench_press"].value, 263);
    }

    #[test]
    fn test_tie_keeps_first_snapshot() {
        // 240 x 3 and 255 x 1 both estimate 264
        let snapshots = vec![
            ExerciseSnapshot::new("squat", 240.0, 3),
            ExerciseSnapshot::new("squat", 255.0, 1),
        ];
        let best = best_estimates(&snapshots);

        assert_eq!(estimate(255.0, 1).value, 264);
        assert_eq!(best["squat"].value, 264);
        assert_eq!(best["squat"].reps_used, 3);
    }

    #[test]
    fn test_clamped_count_excludes_ten_rep_sets() {
        let snapshots = vec![
            ExerciseSnapshot::new("squat", 185.0, 10),
            ExerciseSnapshot::new("squat", 155.0, 11),
            ExerciseSnapshot::new("front_squat", 135.0, 15),
        ];

        assert_eq!(clamped_snapshot_count(&snapshots), 2);
        assert_eq!(clamped_snapshot_count(&snapshots[..1]), 0);
    }
}
