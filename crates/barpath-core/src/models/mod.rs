// ABOUTME: Core data models for the Barpath diagnostic engine
// ABOUTME: Re-exports engine input, output signals, and training enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Input types use `camelCase` field names to match the records callers build
//! from their training logs; output types use `snake_case` to match the
//! rendered `DiagnosticSignals` envelope.
//!
//! ## Core Models
//!
//! - `DiagnosticEngineInput`: one lift diagnosis request
//! - `ExerciseSnapshot`: one logged set
//! - `DiagnosticSignals`: the full engine output
//! - `VolumeConstraints`, `AccessoryExercise`: programming rule table outputs

mod input;
mod programming;
mod signals;
mod training;

pub use input::{DiagnosticEngineInput, ExerciseSnapshot};
pub use programming::{AccessoryExercise, VolumeConstraints};
pub use signals::{
    Deduction, DiagnosticSignals, DominanceArchetype, E1rmConfidence, E1rmResult,
    EfficiencyScore, EvidenceFact, EvidenceType, HypothesisCategory, HypothesisScore, PhaseScore,
    RatioIndex, ValidationTest,
};
pub use training::{Equipment, TrainingAge};
