// ABOUTME: Diagnostic output envelope and its component result types
// ABOUTME: e1RM results, ratio indices, hypotheses, phases, archetype, efficiency, validation test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confidence in an estimated one-rep max
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum E1rmConfidence {
    /// Four reps or fewer
    High,
    /// Five to ten reps
    Medium,
    /// More than ten reps (clamped)
    Low,
}

/// Estimated one-rep max for one exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct E1rmResult {
    /// Rounded estimate
    pub value: u32,
    /// Reps fed into the formula after clamping
    pub reps_used: u32,
    /// Whether the logged reps exceeded the clamp threshold
    pub reps_clamped: bool,
    /// Confidence derived from the logged reps
    pub confidence: E1rmConfidence,
}

/// Secondary-to-primary strength ratio mapped onto a 0-100 index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatioIndex {
    /// `e1rm(secondary) / e1rm(primary)`, rounded to three decimals
    pub ratio: f64,
    /// Position of the ratio inside the expected band, 0-100
    pub index: f64,
    /// Lower bound of the expected ratio band
    pub expected_low: f64,
    /// Upper bound of the expected ratio band
    pub expected_high: f64,
    /// Strength quality this exercise represents (e.g. `triceps`, `pull`)
    pub axis: String,
}

/// Broad class of a weakness hypothesis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisCategory {
    /// A muscle group is under-developed
    Muscle,
    /// Technique or leverage problem
    Mechanical,
    /// Bracing, positional, or stabilizer problem
    Stability,
    /// Anything else (grip, conditioning)
    Other,
}

impl HypothesisCategory {
    /// Canonical lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Muscle => "muscle",
            Self::Mechanical => "mechanical",
            Self::Stability => "stability",
            Self::Other => "other",
        }
    }
}

/// Kind of evidence supporting a hypothesis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    /// A strength ratio fell below its threshold
    Ratio,
    /// A session flag was reported
    Flag,
}

/// One piece of evidence behind a hypothesis score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvidenceFact {
    /// Observed ratio below the rule threshold
    Ratio {
        /// Reference exercise id
        key: String,
        /// Observed secondary/primary ratio
        observed_ratio: f64,
        /// Rule threshold the ratio fell below
        threshold: f64,
        /// Points contributed
        points: u32,
    },
    /// Session flag reported as true
    Flag {
        /// Flag name
        key: String,
        /// Reported value (always true for triggered evidence)
        value: bool,
        /// Points contributed
        points: u32,
    },
}

impl EvidenceFact {
    /// Evidence key (exercise id or flag name)
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Ratio { key, .. } | Self::Flag { key, .. } => key,
        }
    }

    /// Kind of evidence
    #[must_use]
    pub const fn evidence_type(&self) -> EvidenceType {
        match self {
            Self::Ratio { .. } => EvidenceType::Ratio,
            Self::Flag { .. } => EvidenceType::Flag,
        }
    }

    /// Points contributed by this fact
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Self::Ratio { points, .. } | Self::Flag { points, .. } => *points,
        }
    }
}

/// A scored weakness hypothesis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HypothesisScore {
    /// Rule key
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Clamped score, 0-100
    pub score: u32,
    /// Weakness category
    pub category: HypothesisCategory,
    /// Evidence that produced the score
    pub evidence_facts: Vec<EvidenceFact>,
}

/// Accumulated hypothesis points for one movement phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseScore {
    /// Phase identifier
    pub phase_id: String,
    /// Non-negative accumulated points
    pub points: f64,
}

/// Qualitative strength-distribution profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DominanceArchetype {
    /// Archetype label (e.g. `pull-deficient`)
    pub label: String,
    /// Why this label was chosen, naming the deciding index(es)
    pub rationale: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Units of the deltas the rationale refers to
    pub delta_units: String,
}

/// One itemized efficiency deduction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deduction {
    /// Hypothesis key or data-gap key
    pub key: String,
    /// Points subtracted
    pub points: u32,
    /// Human-readable reason
    pub reason: String,
}

/// Balance/efficiency score with itemized deductions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EfficiencyScore {
    /// Final score, 0-100
    pub score: u32,
    /// Short synthesis naming the largest deductions
    pub explanation: String,
    /// Deductions ordered by points descending
    pub deductions: Vec<Deduction>,
}

/// Concrete test that would confirm or refute the top hypothesis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationTest {
    /// What the test is
    pub description: String,
    /// How to run it
    pub how_to_run: String,
    /// Hypothesis key the test targets
    pub hypothesis_tested: String,
}

/// Complete engine output for one lift diagnosis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticSignals {
    /// Output envelope schema version
    pub signals_version: String,
    /// Version of the lift registry that produced these signals
    pub lift_config_version: String,
    /// Lift that was diagnosed
    pub lift_id: String,
    /// One estimate per distinct logged exercise
    pub e1rms: BTreeMap<String, E1rmResult>,
    /// Ratio indices keyed by secondary exercise id
    pub indices: BTreeMap<String, RatioIndex>,
    /// Phase totals, highest first
    pub phase_scores: Vec<PhaseScore>,
    /// Dominant failure phase (never empty)
    pub primary_phase: String,
    /// Share of all phase points held by the primary phase
    pub primary_phase_confidence: f64,
    /// Triggered hypotheses, highest score first
    pub hypothesis_scores: Vec<HypothesisScore>,
    /// Strength-distribution archetype
    pub dominance_archetype: DominanceArchetype,
    /// Balance/efficiency score
    pub efficiency_score: EfficiencyScore,
    /// Suggested confirmation test
    pub validation_test: ValidationTest,
    /// Human-readable descriptions of missing or thin evidence
    pub data_gaps: Vec<String>,
}

impl DiagnosticSignals {
    /// Highest-ranked hypothesis, if any triggered
    #[must_use]
    pub fn top_hypothesis(&self) -> Option<&HypothesisScore> {
        self.hypothesis_scores.first()
    }

    /// Keys of the `limit` highest-ranked hypotheses
    #[must_use]
    pub fn limiter_keys(&self, limit: usize) -> Vec<String> {
        self.hypothesis_scores
            .iter()
            .take(limit)
            .map(|hypothesis| hypothesis.key.clone())
            .collect()
    }
}
