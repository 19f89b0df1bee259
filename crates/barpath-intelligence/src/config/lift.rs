// ABOUTME: Per-lift configuration types deserialized from the lift registry YAML
// ABOUTME: Secondary ratio bands, hypothesis rules, archetype decision rows, accessory catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barpath_core::constants::scoring::MAX_INDEX;
use barpath_core::models::{AccessoryExercise, Equipment, HypothesisCategory, ValidationTest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the engine knows about one lift
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiftConfig {
    /// Lift identifier (e.g. `bench_press`)
    pub lift_id: String,
    /// Display name
    pub name: String,
    /// Movement phases in execution order
    pub phases: Vec<String>,
    /// Phase reported when no hypothesis triggered
    pub default_phase: String,
    /// Recognized secondary exercises and their expected ratio bands
    pub secondaries: Vec<SecondaryExercise>,
    /// Weakness rules in declaration (tie-break) order
    pub hypotheses: Vec<HypothesisRule>,
    /// Test proposed when no hypothesis triggered
    pub default_validation_test: ValidationProtocol,
    /// Efficiency deductions for each data-gap kind
    #[serde(default)]
    pub gap_deductions: GapDeductions,
    /// Dominance archetype decision table
    #[serde(default)]
    pub archetypes: ArchetypeTable,
    /// Accessory exercises tagged by the hypotheses they address
    #[serde(default)]
    pub accessories: Vec<AccessoryEntry>,
}

impl LiftConfig {
    /// Secondary exercise entry for `exercise_id`
    #[must_use]
    pub fn secondary(&self, exercise_id: &str) -> Option<&SecondaryExercise> {
        self.secondaries
            .iter()
            .find(|secondary| secondary.exercise_id == exercise_id)
    }

    /// Hypothesis rule for `key`
    #[must_use]
    pub fn hypothesis(&self, key: &str) -> Option<&HypothesisRule> {
        self.hypotheses.iter().find(|rule| rule.key == key)
    }

    /// Whether `phase_id` is one of this lift's phases
    #[must_use]
    pub fn declares_phase(&self, phase_id: &str) -> bool {
        self.phases.iter().any(|phase| phase == phase_id)
    }
}

/// A recognized secondary exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecondaryExercise {
    /// Exercise id as logged in snapshots
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Strength quality the exercise represents
    pub axis: String,
    /// Expected secondary/primary e1RM ratio band
    pub expected_ratio: RatioBand,
}

/// Expected ratio band `[low, high]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RatioBand {
    /// Ratio mapped to index 0
    pub low: f64,
    /// Ratio mapped to index 100
    pub high: f64,
}

impl RatioBand {
    /// Linear position of `ratio` across the band, clamped to 0-100
    #[must_use]
    pub fn interpolate(&self, ratio: f64) -> f64 {
        let span = self.high - self.low;
        if span <= 0.0 {
            return 0.0;
        }
        ((ratio - self.low) / span * MAX_INDEX).clamp(0.0, MAX_INDEX)
    }
}

/// One weakness hypothesis rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HypothesisRule {
    /// Stable key reported in signals
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Weakness category
    pub category: HypothesisCategory,
    /// Ratio evidence against a reference secondary, if any
    #[serde(default)]
    pub ratio_rule: Option<RatioRule>,
    /// Points added for each session flag reported as true
    #[serde(default)]
    pub flag_bonuses: BTreeMap<String, u32>,
    /// Share of the hypothesis score attributed to each phase
    pub phase_weights: BTreeMap<String, f64>,
    /// Efficiency points deducted when the hypothesis triggers
    #[serde(default)]
    pub deduction_points: u32,
    /// Protocol that confirms or refutes the hypothesis
    pub validation_test: ValidationProtocol,
}

/// Ratio-deficit scoring for one hypothesis
///
/// Points are `min(max_points, base_points + points_per_pct * pct_below)`
/// where `pct_below = (threshold - ratio) / threshold * 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatioRule {
    /// Secondary exercise whose ratio is tested
    pub exercise_id: String,
    /// Ratio below which the rule fires
    pub threshold: f64,
    /// Points awarded as soon as the ratio is below threshold
    pub base_points: u32,
    /// Additional points per percent below threshold
    pub points_per_pct: f64,
    /// Cap on ratio points
    pub max_points: u32,
}

/// Validation protocol text as configured
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationProtocol {
    /// What the test is
    pub description: String,
    /// How to run it
    pub how_to_run: String,
}

impl ValidationProtocol {
    /// Attach the tested hypothesis key
    #[must_use]
    pub fn to_test(&self, hypothesis_tested: impl Into<String>) -> ValidationTest {
        ValidationTest {
            description: self.description.clone(),
            how_to_run: self.how_to_run.clone(),
            hypothesis_tested: hypothesis_tested.into(),
        }
    }
}

/// Efficiency deductions per data-gap kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GapDeductions {
    /// No primary-lift snapshot
    pub primary_missing: u32,
    /// Expected secondaries absent
    pub secondaries_missing: u32,
    /// Some snapshots exceeded the rep clamp
    pub reps_clamped: u32,
    /// No session flags reported
    pub flags_empty: u32,
}

impl Default for GapDeductions {
    fn default() -> Self {
        Self {
            primary_missing: 20,
            secondaries_missing: 6,
            reps_clamped: 4,
            flags_empty: 0,
        }
    }
}

/// Dominance archetype decision table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchetypeTable {
    /// Index-point margin that maps to full confidence
    pub confidence_scale: f64,
    /// Rows evaluated in order; first match wins
    pub rules: Vec<ArchetypeRule>,
}

impl Default for ArchetypeTable {
    fn default() -> Self {
        Self {
            confidence_scale: 25.0,
            rules: Vec::new(),
        }
    }
}

/// One archetype decision row; every present condition must hold
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchetypeRule {
    /// Archetype label emitted on match
    pub label: String,
    /// Short phrase opening the rationale
    pub summary: String,
    /// Category of the top-ranked hypothesis
    #[serde(default)]
    pub leading_category: Option<HypothesisCategory>,
    /// Axis of the lowest index
    #[serde(default)]
    pub lowest_axis: Option<String>,
    /// Axis of the highest index
    #[serde(default)]
    pub highest_axis: Option<String>,
    /// Highest minus lowest index must be at least this
    #[serde(default)]
    pub min_spread: Option<f64>,
    /// Highest minus lowest index must be at most this
    #[serde(default)]
    pub max_spread: Option<f64>,
}

impl ArchetypeRule {
    /// Whether the row carries any condition at all
    #[must_use]
    pub const fn has_conditions(&self) -> bool {
        self.leading_category.is_some()
            || self.lowest_axis.is_some()
            || self.highest_axis.is_some()
            || self.min_spread.is_some()
            || self.max_spread.is_some()
    }
}

/// Accessory catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessoryEntry {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Minimum equipment tier required
    pub equipment: Equipment,
    /// Hypothesis keys this exercise addresses
    pub addresses: Vec<String>,
    /// Suggested working sets
    pub sets: u32,
    /// Suggested rep range
    pub reps: String,
    /// Coaching cue
    pub cue: String,
}

impl AccessoryEntry {
    /// Prescription listing only the `matched` limiter keys
    #[must_use]
    pub fn prescribe(&self, matched: Vec<String>) -> AccessoryExercise {
        AccessoryExercise {
            id: self.id.clone(),
            name: self.name.clone(),
            equipment: self.equipment,
            addresses: matched,
            sets: self.sets,
            reps: self.reps.clone(),
            cue: self.cue.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_band_interpolation_clamps() {
        let band = RatioBand {
            low: 0.85,
            high: 0.95,
        };

        assert!((band.interpolate(0.90) - 50.0).abs() < 1e-9);
        assert!((band.interpolate(0.70) - 0.0).abs() < f64::EPSILON);
        assert!((band.interpolate(1.20) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_archetype_rule_without_conditions() {
        let rule: ArchetypeRule =
            serde_yaml::from_str("label: anything\nsummary: matches everything\n").unwrap();
        assert!(!rule.has_conditions());
    }

    #[test]
    fn test_unknown_rule_field_rejected() {
        let yaml = "label: typo\nsummary: x\nlowest_axes: pull\n";
        assert!(serde_yaml::from_str::<ArchetypeRule>(yaml).is_err());
    }
}
