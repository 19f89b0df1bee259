// ABOUTME: Balance/efficiency score with itemized deductions
// ABOUTME: Deducts configured points per triggered hypothesis and per detected data gap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{GapDeductions, LiftConfig};
use crate::data_gaps::DataGap;
use barpath_core::constants::scoring::EFFICIENCY_START;
use barpath_core::models::{Deduction, EfficiencyScore, HypothesisScore};
use std::cmp::Reverse;

/// Deductions named in the explanation
const EXPLAINED_DEDUCTIONS: usize = 2;

/// Compose the efficiency score for one diagnosis
#[must_use]
pub fn score_efficiency(
    lift: &LiftConfig,
    hypotheses: &[HypothesisScore],
    gaps: &[DataGap],
) -> EfficiencyScore {
    let mut deductions: Vec<Deduction> = hypotheses
        .iter()
        .filter_map(|hypothesis| {
            let points = lift.hypothesis(&hypothesis.key)?.deduction_points;
            Some(Deduction {
                key: hypothesis.key.clone(),
                points,
                reason: format!("{} (score {})", hypothesis.label, hypothesis.score),
            })
        })
        .chain(gaps.iter().map(|gap| Deduction {
            key: gap.key().to_owned(),
            points: gap_points(&lift.gap_deductions, gap),
            reason: gap.describe(),
        }))
        .filter(|deduction| deduction.points > 0)
        .collect();

    deductions.sort_by_key(|deduction| Reverse(deduction.points));

    let total: u32 = deductions.iter().map(|deduction| deduction.points).sum();
    let score = EFFICIENCY_START.saturating_sub(total);

    EfficiencyScore {
        score,
        explanation: explain(score, &deductions),
        deductions,
    }
}

const fn gap_points(table: &GapDeductions, gap: &DataGap) -> u32 {
    match gap {
        DataGap::PrimaryMissing { .. } => table.primary_missing,
        DataGap::SecondariesMissing { .. } => table.secondaries_missing,
        DataGap::RepsClamped { .. } => table.reps_clamped,
        DataGap::FlagsEmpty => table.flags_empty,
    }
}

fn explain(score: u32, deductions: &[Deduction]) -> String {
    if deductions.is_empty() {
        return format!("Score {score}/100 with no deductions");
    }
    let largest: Vec<String> = deductions
        .iter()
        .take(EXPLAINED_DEDUCTIONS)
        .map(|deduction| format!("{} (-{})", deduction.key, deduction.points))
        .collect();
    format!(
        "Score {score}/100; largest deductions: {}",
        largest.join(", ")
    )
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
    fn test_no_deductions_scores_hundred() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();

        let efficiency = score_efficiency(bench, &[], &[]);

        assert_eq!(efficiency.score, 100);
        assert!(efficiency.deductions.is_empty());
    }

    #[test]
    fn test_deductions_sorted_and_explained() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();
        let gaps = [
            DataGap::SecondariesMissing {
                exercise_ids: vec!["barbell_row".to_owned()],
            },
            DataGap::FlagsEmpty,
        ];

        let efficiency = score_efficiency(
            bench,
            &[hypothesis("leg_drive_timing", 25), hypothesis("triceps_lockout_deficit", 20)],
            &gaps,
        );

        // 8 + 12 + 6, flags_empty is a zero-point deduction
        assert_eq!(efficiency.score, 74);
        let keys: Vec<&str> = efficiency.deductions.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["triceps_lockout_deficit", "leg_drive_timing", "secondaries_missing"]
        );
        assert!(efficiency.explanation.contains("triceps_lockout_deficit (-12)"));
        assert!(efficiency.explanation.contains("leg_drive_timing (-8)"));
    }

    #[test]
    fn test_score_never_negative() {
        let registry = LiftRegistry::embedded().unwrap();
        let mut bench = registry.lookup("bench_press").unwrap().clone();
        bench.gap_deductions.primary_missing = 150;

        let efficiency = score_efficiency(
            &bench,
            &[],
            &[DataGap::PrimaryMissing {
                exercise_id: "bench_press".to_owned(),
            }],
        );

        assert_eq!(efficiency.score, 0);
    }
}
