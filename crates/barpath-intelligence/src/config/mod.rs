// ABOUTME: Configuration module for barpath-intelligence crate
// ABOUTME: Re-exports the lift registry, per-lift config types, and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Per-lift configuration types
pub mod lift;
/// Registry loading, validation, and lookup
pub mod registry;

pub use error::ConfigError;
pub use lift::{
    AccessoryEntry, ArchetypeRule, ArchetypeTable, GapDeductions, HypothesisRule, LiftConfig,
    RatioBand, RatioRule, SecondaryExercise, ValidationProtocol,
};
pub use registry::{LiftRegistry, ScoringConfig};
