// ABOUTME: Numeric building blocks of the diagnostic engine
// ABOUTME: e1RM estimation and ratio index interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Module
//!
//! Pure numeric stages that feed the rule interpreters: one-rep-max
//! estimation from logged sets and secondary/primary ratio indices.

pub mod e1rm;
pub mod ratios;

pub use e1rm::{best_estimates, clamped_snapshot_count, confidence_for_reps, estimate};
pub use ratios::{compute_indices, index_ratios, secondary_ratios};

/// Round `value` to `decimals` places, half away from zero
#[must_use]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
