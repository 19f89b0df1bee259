// ABOUTME: Main library entry point for the Barpath lift diagnostic engine
// ABOUTME: Re-exports the core models and errors, the engine entry points, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barpath
//!
//! A deterministic diagnostic and rules engine for strength training. Given a
//! lifter's logged sets and session flags for one lift, it estimates one-rep
//! maxes, normalizes secondary lifts into ratio indices, ranks weakness
//! hypotheses, selects the dominant failure phase, classifies a strength
//! archetype, and scores overall balance. Two sibling rule tables provide
//! training-age volume ceilings and equipment-filtered accessory selection.
//!
//! ## Example
//!
//! ```rust,no_run
//! use barpath::models::{DiagnosticEngineInput, Equipment, ExerciseSnapshot};
//!
//! let input = DiagnosticEngineInput::new("bench_press")
//!     .with_snapshot(ExerciseSnapshot::new("bench_press", 225.0, 5))
//!     .with_snapshot(ExerciseSnapshot::new("close_grip_bench_press", 185.0, 5))
//!     .with_flag("bar_slows_at_lockout", true);
//!
//! let signals = barpath::run_diagnostic_engine(&input)?;
//! let limiters = signals.limiter_keys(2);
//! let accessories = barpath::recommend_accessories("bench_press", &limiters, Equipment::Home);
//! # Ok::<(), barpath::errors::AppError>(())
//! ```

/// Structured logging configuration
pub mod logging;

pub use barpath_core::{constants, errors, models};
pub use barpath_intelligence::{
    accessories, algorithms, config, known_lift_ids, recommend_accessories, run_diagnostic_batch,
    run_diagnostic_engine, volume_constraints, volume_constraints_for_label, DiagnosticEngine,
    LiftRegistry,
};
