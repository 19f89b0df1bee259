// ABOUTME: Generic interpreter that scores configured weakness hypotheses
// ABOUTME: Combines ratio-deficit points and session flag bonuses into ranked, evidenced scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::ratios::RATIO_DECIMALS;
use crate::algorithms::round_to;
use crate::config::{HypothesisRule, LiftConfig, RatioRule};
use barpath_core::constants::scoring::MAX_SCORE;
use barpath_core::models::{EvidenceFact, HypothesisScore};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Score every rule of `lift`, drop zero scores, rank, and cap the list
///
/// `ratios` holds unrounded secondary/primary ratios keyed by exercise id.
/// Ranking is score descending; equal scores keep rule declaration order.
#[must_use]
pub fn score_hypotheses(
    lift: &LiftConfig,
    ratios: &BTreeMap<String, f64>,
    flags: &BTreeMap<String, bool>,
    max_hypotheses: usize,
) -> Vec<HypothesisScore> {
    let mut scores: Vec<HypothesisScore> = lift
        .hypotheses
        .iter()
        .filter_map(|rule| evaluate_rule(rule, ratios, flags))
        .collect();

    // Stable sort keeps declaration order among ties
    scores.sort_by_key(|hypothesis| Reverse(hypothesis.score));
    scores.truncate(max_hypotheses);
    scores
}

/// Evaluate one rule; `None` when it earns no points
#[must_use]
pub fn evaluate_rule(
    rule: &HypothesisRule,
    ratios: &BTreeMap<String, f64>,
    flags: &BTreeMap<String, bool>,
) -> Option<HypothesisScore> {
    let mut evidence_facts = Vec::new();

    if let Some(ratio_rule) = &rule.ratio_rule {
        if let Some(&ratio) = ratios.get(&ratio_rule.exercise_id) {
            if let Some(points) = ratio_points(ratio_rule, ratio) {
                evidence_facts.push(EvidenceFact::Ratio {
                    key: ratio_rule.exercise_id.clone(),
                    observed_ratio: round_to(ratio, RATIO_DECIMALS),
                    threshold: ratio_rule.threshold,
                    points,
                });
            }
        }
    }

    for (flag, bonus) in &rule.flag_bonuses {
        if flags.get(flag).copied().unwrap_or(false) {
            evidence_facts.push(EvidenceFact::Flag {
                key: flag.clone(),
                value: true,
                points: *bonus,
            });
        }
    }

    let total: u32 = evidence_facts.iter().map(EvidenceFact::points).sum();
    if total == 0 {
        return None;
    }

    Some(HypothesisScore {
        key: rule.key.clone(),
        label: rule.label.clone(),
        score: total.min(MAX_SCORE as u32),
        category: rule.category,
        evidence_facts,
    })
}

/// Points for a ratio strictly below the rule threshold, `None` otherwise
#[must_use]
pub fn ratio_points(rule: &RatioRule, ratio: f64) -> Option<u32> {
    if ratio >= rule.threshold {
        return None;
    }
    let pct_below = (rule.threshold - ratio) / rule.threshold * 100.0;
    let points = pct_below
        .mul_add(rule.points_per_pct, f64::from(rule.base_points))
        .round()
        .min(f64::from(rule.max_points));
    Some(points.max(0.0) as u32)
}
