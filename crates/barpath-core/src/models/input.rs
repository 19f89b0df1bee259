// ABOUTME: Diagnostic engine input types built by callers from logged training data
// ABOUTME: ExerciseSnapshot (one logged set) and DiagnosticEngineInput (one lift diagnosis)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::training::{Equipment, TrainingAge};
use crate::errors::{AppError, AppResult};

/// One logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSnapshot {
    /// Catalog key of the exercise
    pub exercise_id: String,
    /// Load lifted, in the lifter's chosen unit
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Sets performed at this load (informational, does not affect e1RM)
    #[serde(default = "default_sets")]
    pub sets: u32,
}

const fn default_sets() -> u32 {
    1
}

impl ExerciseSnapshot {
    /// Create a single-set snapshot
    pub fn new(exercise_id: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            weight,
            reps,
            sets: 1,
        }
    }

    /// Set the number of sets performed
    #[must_use]
    pub const fn with_sets(mut self, sets: u32) -> Self {
        self.sets = sets;
        self
    }

    /// Check the numeric fields the engine assumes are sanitized
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the exercise id is empty, the weight is not a
    /// positive finite number, or reps/sets are zero
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.trim().is_empty() {
            return Err(AppError::missing_field("exerciseId"));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight for {} must be a positive number, got {}",
                self.exercise_id, self.weight
            ))
            .with_resource_id(self.exercise_id.clone()));
        }
        if self.reps == 0 || self.sets == 0 {
            return Err(AppError::out_of_range(format!(
                "reps and sets for {} must be at least 1",
                self.exercise_id
            ))
            .with_resource_id(self.exercise_id.clone()));
        }
        Ok(())
    }
}

/// A single lift diagnosis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticEngineInput {
    /// The lift being diagnosed
    pub lift_id: String,
    /// Exercise id of the primary lift when it differs from `lift_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_exercise_id: Option<String>,
    /// Logged sets, possibly containing several entries per exercise
    #[serde(default)]
    pub snapshots: Vec<ExerciseSnapshot>,
    /// Session-reported qualitative signals (e.g. `bar_slows_at_lockout`)
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
    /// Lifter bodyweight in pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodyweight_lbs: Option<f64>,
    /// Self-reported training experience
    #[serde(default)]
    pub training_age: TrainingAge,
    /// Available equipment tier
    #[serde(default)]
    pub equipment: Equipment,
}

impl DiagnosticEngineInput {
    /// Create an input for `lift_id` with no snapshots or flags
    pub fn new(lift_id: impl Into<String>) -> Self {
        Self {
            lift_id: lift_id.into(),
            primary_exercise_id: None,
            snapshots: Vec::new(),
            flags: BTreeMap::new(),
            bodyweight_lbs: None,
            training_age: TrainingAge::Unspecified,
            equipment: Equipment::Commercial,
        }
    }

    /// Exercise id the secondary ratios are normalized against
    #[must_use]
    pub fn primary_exercise(&self) -> &str {
        self.primary_exercise_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.lift_id)
    }

    /// Append a logged set
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: ExerciseSnapshot) -> Self {
        self.snapshots.push(snapshot);
        self
    }

    /// Record a session flag
    #[must_use]
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.flags.insert(key.into(), value);
        self
    }

    /// Override the primary exercise id
    #[must_use]
    pub fn with_primary_exercise(mut self, exercise_id: impl Into<String>) -> Self {
        self.primary_exercise_id = Some(exercise_id.into());
        self
    }

    /// Set training age
    #[must_use]
    pub const fn with_training_age(mut self, training_age: TrainingAge) -> Self {
        self.training_age = training_age;
        self
    }

    /// Set equipment tier
    #[must_use]
    pub const fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    /// Validate the fields the engine assumes callers have already sanitized
    ///
    /// The engine never calls this itself; it is offered to callers that build
    /// inputs from untrusted sources before invoking the engine.
    ///
    /// # Errors
    ///
    /// Returns `AppError` for an empty lift id, any invalid snapshot, or a
    /// non-positive bodyweight
    pub fn validate(&self) -> AppResult<()> {
        if self.lift_id.trim().is_empty() {
            return Err(AppError::missing_field("liftId"));
        }
        if let Some(bodyweight) = self.bodyweight_lbs {
            if !bodyweight.is_finite() || bodyweight <= 0.0 {
                return Err(AppError::out_of_range(format!(
                    "bodyweightLbs must be a positive number, got {bodyweight}"
                )));
            }
        }
        self.snapshots.iter().try_for_each(ExerciseSnapshot::validate)
    }
}
