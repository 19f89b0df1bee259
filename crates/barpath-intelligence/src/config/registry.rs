// ABOUTME: Lift Configuration Registry loading, validation, and lookup
// ABOUTME: Embedded YAML defaults with a BARPATH_LIFT_CONFIG file override and a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lift Configuration Registry
//!
//! The registry is declared as data in `data/lift_configs.yaml` and embedded at
//! compile time. [`LiftRegistry::global`] loads it once per process; callers
//! that need an isolated registry (tests, alternate rule sets) build one with
//! [`LiftRegistry::from_yaml_str`] or [`LiftRegistry::from_yaml_file`].

use super::error::ConfigError;
use super::lift::{ArchetypeRule, HypothesisRule, LiftConfig};
use barpath_core::constants::env_config::LIFT_CONFIG_PATH;
use barpath_core::constants::scoring::MAX_SCORE;
use barpath_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

/// Registry shipped with the crate
const EMBEDDED_REGISTRY: &str = include_str!("../../data/lift_configs.yaml");

/// Allowed deviation of a phase-weight sum from 1.0
const PHASE_WEIGHT_TOLERANCE: f64 = 0.01;

/// Global registry singleton
static LIFT_REGISTRY: OnceLock<LiftRegistry> = OnceLock::new();

/// Scoring knobs shared by every lift
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Length cap applied to the sorted hypothesis list
    pub max_hypotheses: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { max_hypotheses: 8 }
    }
}

/// Immutable per-lift diagnostic knowledge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiftRegistry {
    /// Registry version reported as `lift_config_version`
    pub version: String,
    /// Cross-lift scoring settings
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Lifts in declaration order
    pub lifts: Vec<LiftConfig>,
}

impl LiftRegistry {
    /// Get the global registry instance
    ///
    /// A registry that fails to load or validate is logged and replaced by the
    /// embedded defaults.
    pub fn global() -> &'static Self {
        LIFT_REGISTRY.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load lift registry: {e}, using embedded defaults");
                Self::embedded_or_empty()
            })
        })
    }

    /// Load the registry, honoring the `BARPATH_LIFT_CONFIG` override
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read, does not parse,
    /// or fails validation
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(LIFT_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => {
                debug!(path = %path, "Loading lift registry override");
                Self::from_yaml_file(path.trim())
            }
            Ok(_) | Err(env::VarError::NotPresent) => Self::embedded(),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate the embedded registry
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails to parse or validate
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml_str(EMBEDDED_REGISTRY)
    }

    /// Parse and validate a registry document
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the registry schema or
    /// validation fails
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let registry: Self = serde_yaml::from_str(yaml)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Read, parse, and validate a registry file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn embedded_or_empty() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            error!("Embedded lift registry is invalid: {e}");
            Self {
                version: "unavailable".to_owned(),
                scoring: ScoringConfig::default(),
                lifts: Vec::new(),
            }
        })
    }

    /// Configuration for `lift_id`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigNotFound` when the lift is not registered
    pub fn lookup(&self, lift_id: &str) -> AppResult<&LiftConfig> {
        self.get(lift_id)
            .ok_or_else(|| AppError::lift_config_not_found(lift_id))
    }

    /// Configuration for `lift_id`, if registered
    #[must_use]
    pub fn get(&self, lift_id: &str) -> Option<&LiftConfig> {
        self.lifts.iter().find(|lift| lift.lift_id == lift_id)
    }

    /// Every registered lift id in declaration order
    #[must_use]
    pub fn known_lift_ids(&self) -> Vec<&str> {
        self.lifts.iter().map(|lift| lift.lift_id.as_str()).collect()
    }

    /// Validate cross-references and numeric ranges
    ///
    /// # Errors
    ///
    /// Returns the first violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::MissingField("version".to_owned()));
        }
        if self.scoring.max_hypotheses == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "scoring.max_hypotheses must be at least 1".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for lift in &self.lifts {
            if !seen.insert(lift.lift_id.as_str()) {
                return Err(ConfigError::Parse(format!(
                    "duplicate lift id '{}'",
                    lift.lift_id
                )));
            }
            validate_lift(lift)?;
        }
        Ok(())
    }
}

fn validate_lift(lift: &LiftConfig) -> Result<(), ConfigError> {
    let id = &lift.lift_id;
    if id.trim().is_empty() {
        return Err(ConfigError::MissingField("lift_id".to_owned()));
    }
    if lift.phases.is_empty() {
        return Err(ConfigError::MissingField(format!("{id}: phases")));
    }
    if !lift.declares_phase(&lift.default_phase) {
        return Err(ConfigError::UnknownReference(format!(
            "{id}: default_phase '{}' is not a declared phase",
            lift.default_phase
        )));
    }

    let mut secondary_ids = HashSet::new();
    for secondary in &lift.secondaries {
        let band = secondary.expected_ratio;
        if band.low <= 0.0 || band.low >= band.high {
            return Err(ConfigError::InvalidRange(format!(
                "{id}: expected ratio for '{}' must satisfy 0 < low < high",
                secondary.exercise_id
            )));
        }
        if !secondary_ids.insert(secondary.exercise_id.as_str()) {
            return Err(ConfigError::Parse(format!(
                "{id}: duplicate secondary '{}'",
                secondary.exercise_id
            )));
        }
    }

    let mut hypothesis_keys = HashSet::new();
    for rule in &lift.hypotheses {
        if !hypothesis_keys.insert(rule.key.as_str()) {
            return Err(ConfigError::Parse(format!(
                "{id}: duplicate hypothesis '{}'",
                rule.key
            )));
        }
        validate_hypothesis(lift, rule)?;
    }

    let table = &lift.archetypes;
    if table.confidence_scale <= 0.0 {
        return Err(ConfigError::ValueOutOfRange(format!(
            "{id}: archetypes.confidence_scale must be positive"
        )));
    }
    for row in &table.rules {
        validate_archetype_row(lift, row)?;
    }

    for accessory in &lift.accessories {
        if accessory.id.trim().is_empty() || accessory.name.trim().is_empty() {
            return Err(ConfigError::MissingField(format!(
                "{id}: accessory id and name"
            )));
        }
        if accessory.sets == 0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{id}: accessory '{}' must prescribe at least one set",
                accessory.id
            )));
        }
        if let Some(unknown) = accessory
            .addresses
            .iter()
            .find(|key| !hypothesis_keys.contains(key.as_str()))
        {
            return Err(ConfigError::UnknownReference(format!(
                "{id}: accessory '{}' addresses undeclared hypothesis '{unknown}'",
                accessory.id
            )));
        }
    }
    Ok(())
}

fn validate_hypothesis(lift: &LiftConfig, rule: &HypothesisRule) -> Result<(), ConfigError> {
    let id = &lift.lift_id;
    if let Some(ratio_rule) = &rule.ratio_rule {
        if lift.secondary(&ratio_rule.exercise_id).is_none() {
            return Err(ConfigError::UnknownReference(format!(
                "{id}: hypothesis '{}' references undeclared secondary '{}'",
                rule.key, ratio_rule.exercise_id
            )));
        }
        if ratio_rule.threshold <= 0.0 || ratio_rule.points_per_pct < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{id}: hypothesis '{}' needs a positive threshold and non-negative points_per_pct",
                rule.key
            )));
        }
        if f64::from(ratio_rule.max_points) > MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{id}: hypothesis '{}' max_points exceeds 100",
                rule.key
            )));
        }
    }

    if rule.phase_weights.is_empty() {
        return Err(ConfigError::MissingField(format!(
            "{id}: hypothesis '{}' phase_weights",
            rule.key
        )));
    }
    let mut sum = 0.0;
    for (phase, weight) in &rule.phase_weights {
        if !lift.declares_phase(phase) {
            return Err(ConfigError::UnknownReference(format!(
                "{id}: hypothesis '{}' weights undeclared phase '{phase}'",
                rule.key
            )));
        }
        if *weight < 0.0 {
            return Err(ConfigError::InvalidWeights(format!(
                "{id}: hypothesis '{}' has a negative weight for '{phase}'",
                rule.key
            )));
        }
        sum += weight;
    }
    if (sum - 1.0).abs() > PHASE_WEIGHT_TOLERANCE {
        return Err(ConfigError::InvalidWeights(format!(
            "{id}: phase weights for '{}' sum to {sum:.3}, expected 1.0",
            rule.key
        )));
    }
    Ok(())
}

fn validate_archetype_row(lift: &LiftConfig, row: &ArchetypeRule) -> Result<(), ConfigError> {
    let id = &lift.lift_id;
    if !row.has_conditions() {
        return Err(ConfigError::MissingField(format!(
            "{id}: archetype '{}' has no conditions",
            row.label
        )));
    }
    for axis in [&row.lowest_axis, &row.highest_axis].into_iter().flatten() {
        if !lift.secondaries.iter().any(|s| &s.axis == axis) {
            return Err(ConfigError::UnknownReference(format!(
                "{id}: archetype '{}' uses undeclared axis '{axis}'",
                row.label
            )));
        }
    }
    if let (Some(min), Some(max)) = (row.min_spread, row.max_spread) {
        if min > max {
            return Err(ConfigError::InvalidRange(format!(
                "{id}: archetype '{}' has min_spread > max_spread",
                row.label
            )));
        }
    }
    if row.max_spread.is_some_and(|max| max <= 0.0) {
        return Err(ConfigError::ValueOutOfRange(format!(
            "{id}: archetype '{}' max_spread must be positive",
            row.label
        )));
    }
    Ok(())
}
