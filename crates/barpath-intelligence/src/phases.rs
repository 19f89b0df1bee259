// ABOUTME: Phase scorer distributing hypothesis points across movement phases
// ABOUTME: Selects the primary failure phase and its share of all phase points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::round_to;
use crate::config::LiftConfig;
use barpath_core::models::{HypothesisScore, PhaseScore};

/// Phase totals plus the selected primary phase
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSelection {
    /// Every declared phase, highest points first
    pub phase_scores: Vec<PhaseScore>,
    /// Phase with the greatest total, or the lift's default phase
    pub primary_phase: String,
    /// Primary phase share of all points, 0 when nothing scored
    pub confidence: f64,
}

/// Distribute hypothesis scores across phases by each rule's phase weights
#[must_use]
pub fn score_phases(lift: &LiftConfig, hypotheses: &[HypothesisScore]) -> PhaseSelection {
    let mut totals: Vec<(String, f64)> = lift
        .phases
        .iter()
        .map(|phase| (phase.clone(), 0.0))
        .collect();

    for hypothesis in hypotheses {
        let Some(rule) = lift.hypothesis(&hypothesis.key) else {
            continue;
        };
        let score = f64::from(hypothesis.score);
        for (phase, total) in &mut totals {
            if let Some(weight) = rule.phase_weights.get(phase.as_str()) {
                *total = score.mul_add(*weight, *total);
            }
        }
    }

    // Declaration order survives among equal totals
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    let sum: f64 = totals.iter().map(|(_, points)| points).sum();
    let (primary_phase, confidence) = match totals.first() {
        Some((phase, points)) if sum > 0.0 => (phase.clone(), round_to(points / sum, 2)),
        _ => (lift.default_phase.clone(), 0.0),
    };

    PhaseSelection {
        phase_scores: totals
            .into_iter()
            .map(|(phase_id, points)| PhaseScore {
                phase_id,
                points: round_to(points, 2),
            })
            .collect(),
        primary_phase,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LiftRegistry;
    use barpath_core::models::HypothesisCategory;

    fn hypothesis(key: &str, score: u32) -> HypothesisScore {
        HypothesisScore {
            key: key.to_owned(),
            label: key.to_owned(),
            score,
            category: HypothesisCategory::Muscle,
            evidence_facts: Vec::new(),
        }
    }

    #[test]
    fn test_no_hypotheses_uses_default_phase() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();

        let selection = score_phases(bench, &[]);

        assert_eq!(selection.primary_phase, "mid_range");
        assert!(selection.confidence.abs() < f64::EPSILON);
        assert_eq!(selection.phase_scores.len(), 3);
        assert_eq!(selection.phase_scores[0].phase_id, "off_chest");
    }

    #[test]
    fn test_weighted_distribution() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();
        // lockout 40; shoulder drive 50 -> mid 30, off_chest 20
        let selection = score_phases(
            bench,
            &[
                hypothesis("triceps_lockout_deficit", 40),
                hypothesis("shoulder_drive_deficit", 50),
            ],
        );

        assert_eq!(selection.primary_phase, "lockout");
        assert!((selection.confidence - 0.44).abs() < 1e-9);
        assert_eq!(selection.phase_scores[1].phase_id, "mid_range");
        assert!((selection.phase_scores[1].points - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_phase_hypothesis_full_confidence() {
        let registry = LiftRegistry::embedded().unwrap();
        let squat = registry.lookup("squat").unwrap();

        let selection = score_phases(squat, &[hypothesis("out_of_hole_weakness", 30)]);

        assert_eq!(selection.primary_phase, "hole");
        assert!((selection.confidence - 1.0).abs() < f64::EPSILON);
    }
}
