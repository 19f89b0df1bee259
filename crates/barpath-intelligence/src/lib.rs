// ABOUTME: Deterministic lift diagnostic engine and program-building rule tables
// ABOUTME: Lift registry, e1RM and ratio algorithms, rule interpreters, and the orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barpath Intelligence
//!
//! Pure, synchronous diagnostic engine. Every stage reads the immutable
//! [`LiftRegistry`] and never performs I/O beyond the one-time registry load.

/// Accessory selection by limiter and equipment tier
pub mod accessories;
/// e1RM estimation and ratio indices
pub mod algorithms;
/// Dominance archetype decision table
pub mod archetype;
/// Lift registry configuration
pub mod config;
/// Missing and thin evidence detection
pub mod data_gaps;
/// Efficiency score composition
pub mod efficiency;
/// Orchestrator
pub mod engine;
/// Hypothesis rule interpreter
pub mod hypothesis;
/// Phase scoring and primary phase selection
pub mod phases;
/// Validation test selection
pub mod validation;
/// Training-age volume ceilings
pub mod volume;

pub use config::{ConfigError, LiftConfig, LiftRegistry};
pub use engine::{
    known_lift_ids, recommend_accessories, run_diagnostic_batch, run_diagnostic_engine,
    DiagnosticEngine,
};
pub use volume::{volume_constraints, volume_constraints_for_label};
