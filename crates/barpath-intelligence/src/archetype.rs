// ABOUTME: Dominance archetype classifier driven by a per-lift decision table
// ABOUTME: Matches index extremes, index spread, and leading hypothesis category to a profile label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::round_to;
use crate::config::{ArchetypeRule, LiftConfig};
use barpath_core::constants::scoring::{MAX_SCORE, NEUTRAL_INDEX};
use barpath_core::constants::signals::{DELTA_UNITS, UNDETERMINED_ARCHETYPE};
use barpath_core::models::{DominanceArchetype, HypothesisScore, RatioIndex};
use std::collections::BTreeMap;

/// Index ordering used by the decision table
struct IndexProfile<'a> {
    /// Indices lowest first; equal indices keep exercise id order
    ascending: Vec<(&'a str, &'a RatioIndex)>,
    /// Indices highest first; equal indices keep exercise id order
    descending: Vec<(&'a str, &'a RatioIndex)>,
}

impl<'a> IndexProfile<'a> {
    fn new(indices: &'a BTreeMap<String, RatioIndex>) -> Self {
        let mut ascending: Vec<(&str, &RatioIndex)> = indices
            .iter()
            .map(|(exercise, index)| (exercise.as_str(), index))
            .collect();
        let mut descending = ascending.clone();
        ascending.sort_by(|a, b| a.1.index.total_cmp(&b.1.index));
        descending.sort_by(|a, b| b.1.index.total_cmp(&a.1.index));
        Self {
            ascending,
            descending,
        }
    }

    fn lowest(&self) -> Option<(&'a str, &'a RatioIndex)> {
        self.ascending.first().copied()
    }

    fn highest(&self) -> Option<(&'a str, &'a RatioIndex)> {
        self.descending.first().copied()
    }

    /// Highest minus lowest index; needs at least two indices
    fn spread(&self) -> Option<f64> {
        if self.ascending.len() < 2 {
            return None;
        }
        Some(self.highest()?.1.index - self.lowest()?.1.index)
    }
}

/// Classify the strength profile of one diagnosis
///
/// Rows of the lift's archetype table are evaluated in order and the first row
/// whose conditions all hold wins. With no matching row the label is
/// `undetermined` with zero confidence.
#[must_use]
pub fn classify(
    lift: &LiftConfig,
    indices: &BTreeMap<String, RatioIndex>,
    hypotheses: &[HypothesisScore],
) -> DominanceArchetype {
    let profile = IndexProfile::new(indices);
    let scale = lift.archetypes.confidence_scale;

    lift.archetypes
        .rules
        .iter()
        .find(|row| row_matches(row, &profile, hypotheses))
        .map_or_else(
            || undetermined(indices, hypotheses),
            |row| decide(row, &profile, hypotheses, scale),
        )
}

fn row_matches(
    row: &ArchetypeRule,
    profile: &IndexProfile<'_>,
    hypotheses: &[HypothesisScore],
) -> bool {
    if let Some(category) = row.leading_category {
        if hypotheses.first().map(|top| top.category) != Some(category) {
            return false;
        }
    }
    if let Some(axis) = &row.lowest_axis {
        if profile.lowest().map(|(_, index)| &index.axis) != Some(axis) {
            return false;
        }
    }
    if let Some(axis) = &row.highest_axis {
        if profile.highest().map(|(_, index)| &index.axis) != Some(axis) {
            return false;
        }
    }
    if row.min_spread.is_some() || row.max_spread.is_some() {
        let Some(spread) = profile.spread() else {
            return false;
        };
        if row.min_spread.is_some_and(|min| spread < min)
            || row.max_spread.is_some_and(|max| spread > max)
        {
            return false;
        }
    }
    true
}

fn decide(
    row: &ArchetypeRule,
    profile: &IndexProfile<'_>,
    hypotheses: &[HypothesisScore],
    scale: f64,
) -> DominanceArchetype {
    let (rationale, confidence) = if row.lowest_axis.is_some() {
        extreme_rationale(row, &profile.ascending, "lowest", "below", scale)
    } else if row.highest_axis.is_some() {
        extreme_rationale(row, &profile.descending, "highest", "above", scale)
    } else if row.min_spread.is_some() || row.max_spread.is_some() {
        spread_rationale(row, profile, scale)
    } else {
        category_rationale(row, hypotheses)
    };

    DominanceArchetype {
        label: row.label.clone(),
        rationale,
        confidence: round_to(confidence.clamp(0.0, 1.0), 2),
        delta_units: DELTA_UNITS.to_owned(),
    }
}

fn extreme_rationale(
    row: &ArchetypeRule,
    ordered: &[(&str, &RatioIndex)],
    rank: &str,
    direction: &str,
    scale: f64,
) -> (String, f64) {
    match ordered {
        [(exercise, deciding), (next_exercise, next), ..] => {
            let gap = (next.index - deciding.index).abs();
            (
                format!(
                    "{}: {exercise} index {:.1} is the {rank}, {gap:.1} index points {direction} {next_exercise} ({:.1})",
                    row.summary, deciding.index, next.index
                ),
                gap / scale,
            )
        }
        [(exercise, deciding)] => {
            let delta = (deciding.index - NEUTRAL_INDEX).abs();
            (
                format!(
                    "{}: {exercise} index {:.1} is the only index, {delta:.1} index points from neutral",
                    row.summary, deciding.index
                ),
                delta / scale,
            )
        }
        [] => (row.summary.clone(), 0.0),
    }
}

fn spread_rationale(row: &ArchetypeRule, profile: &IndexProfile<'_>, scale: f64) -> (String, f64) {
    let (Some((low_exercise, low)), Some((high_exercise, high)), Some(spread)) =
        (profile.lowest(), profile.highest(), profile.spread())
    else {
        return (row.summary.clone(), 0.0);
    };

    let confidence = match (row.max_spread, row.min_spread) {
        (Some(max), _) => 1.0 - spread / max,
        (None, Some(min)) => (spread - min) / scale,
        (None, None) => 0.0,
    };
    (
        format!(
            "{}: indices span {spread:.1} index points, from {low_exercise} ({:.1}) to {high_exercise} ({:.1})",
            row.summary, low.index, high.index
        ),
        confidence,
    )
}

fn category_rationale(row: &ArchetypeRule, hypotheses: &[HypothesisScore]) -> (String, f64) {
    match hypotheses {
        [top, second, ..] => {
            let margin = top.score.saturating_sub(second.score);
            (
                format!(
                    "{}: {} leads with {} points, {margin} ahead of {}",
                    row.summary, top.label, top.score, second.label
                ),
                f64::from(margin) / MAX_SCORE,
            )
        }
        [top] => (
            format!(
                "{}: {} is the only hypothesis ({}, {} points)",
                row.summary,
                top.label,
                top.category.as_str(),
                top.score
            ),
            f64::from(top.score) / MAX_SCORE,
        ),
        [] => (row.summary.clone(), 0.0),
    }
}

fn undetermined(
    indices: &BTreeMap<String, RatioIndex>,
    hypotheses: &[HypothesisScore],
) -> DominanceArchetype {
    let rationale = if indices.is_empty() && hypotheses.is_empty() {
        "No ratio indices or hypotheses available to classify the strength profile"
    } else {
        "No archetype pattern matched the available indices and hypotheses"
    };
    DominanceArchetype {
        label: UNDETERMINED_ARCHETYPE.to_owned(),
        rationale: rationale.to_owned(),
        confidence: 0.0,
        delta_units: DELTA_UNITS.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LiftRegistry;
    use barpath_core::models::HypothesisCategory;

    fn index(value: f64, axis: &str) -> RatioIndex {
        RatioIndex {
            ratio: 0.0,
            index: value,
            expected_low: 0.0,
            expected_high: 1.0,
            axis: axis.to_owned(),
        }
    }

    fn hypothesis(key: &str, score: u32, category: HypothesisCategory) -> HypothesisScore {
        HypothesisScore {
            key: key.to_owned(),
            label: key.to_owned(),
            score,
            category,
            evidence_facts: Vec::new(),
        }
    }

    #[test]
    fn test_lowest_axis_row() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();
        let indices = BTreeMap::from([
            ("barbell_row".to_owned(), index(10.0, "pull")),
            ("close_grip_bench_press".to_owned(), index(60.0, "triceps")),
        ]);

        let archetype = classify(bench, &indices, &[]);

        assert_eq!(archetype.label, "pull-deficient");
        assert!((archetype.confidence - 1.0).abs() < f64::EPSILON);
        assert!(archetype.rationale.contains("barbell_row"));
        assert_eq!(archetype.delta_units, "index_points");
    }

    #[test]
    fn test_narrow_spread_is_balanced() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();
        let indices = BTreeMap::from([
            ("barbell_row".to_owned(), index(45.0, "pull")),
            ("close_grip_bench_press".to_owned(), index(51.0, "triceps")),
        ]);

        let archetype = classify(bench, &indices, &[]);

        assert_eq!(archetype.label, "balanced");
        assert!((archetype.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_category_row_precedes_index_rows() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();
        let indices = BTreeMap::from([
            ("barbell_row".to_owned(), index(10.0, "pull")),
            ("close_grip_bench_press".to_owned(), index(60.0, "triceps")),
        ]);
        let hypotheses = [
            hypothesis("upper_back_stability", 50, HypothesisCategory::Stability),
            hypothesis("triceps_lockout_deficit", 30, HypothesisCategory::Muscle),
        ];

        let archetype = classify(bench, &indices, &hypotheses);

        assert_eq!(archetype.label, "stability-limited");
        assert!((archetype.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_evidence_is_undetermined() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();

        let archetype = classify(bench, &BTreeMap::new(), &[]);

        assert_eq!(archetype.label, "undetermined");
        assert!(archetype.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_index_never_matches_spread_rows() {
        let registry = LiftRegistry::embedded().unwrap();
        let bench = registry.lookup("bench_press").unwrap();
        let indices = BTreeMap::from([("barbell_row".to_owned(), index(20.0, "pull"))]);

        // pull-deficient needs min_spread, so a lone index falls through
        let archetype = classify(bench, &indices, &[]);

        assert_eq!(archetype.label, "undetermined");
    }
}
