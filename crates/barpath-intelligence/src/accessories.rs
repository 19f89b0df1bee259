// ABOUTME: Accessory selector filtering a lift's catalog by limiters and equipment tier
// ABOUTME: Unknown lifts and empty limiter lists yield an empty prescription list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{LiftConfig, LiftRegistry};
use barpath_core::models::{AccessoryExercise, DiagnosticSignals, Equipment};
use tracing::debug;

/// Catalog entries of `lift` addressing any of `limiters` within `equipment`
///
/// Each prescription lists only the requested limiters it addresses, in
/// catalog order. Catalog order is preserved.
#[must_use]
pub fn select<S: AsRef<str>>(
    lift: &LiftConfig,
    limiters: &[S],
    equipment: Equipment,
) -> Vec<AccessoryExercise> {
    if limiters.is_empty() {
        return Vec::new();
    }

    lift.accessories
        .iter()
        .filter(|entry| equipment.provides(entry.equipment))
        .filter_map(|entry| {
            let matched: Vec<String> = entry
                .addresses
                .iter()
                .filter(|key| limiters.iter().any(|limiter| limiter.as_ref() == key.as_str()))
                .cloned()
                .collect();
            (!matched.is_empty()).then(|| entry.prescribe(matched))
        })
        .collect()
}

/// Approved accessories for `lift_id`; empty for an unregistered lift
#[must_use]
pub fn approved_accessories<S: AsRef<str>>(
    registry: &LiftRegistry,
    lift_id: &str,
    limiters: &[S],
    equipment: Equipment,
) -> Vec<AccessoryExercise> {
    registry.get(lift_id).map_or_else(
        || {
            debug!(lift_id, "No accessory catalog for unregistered lift");
            Vec::new()
        },
        |lift| select(lift, limiters, equipment),
    )
}

/// Approved accessories for the `max_limiters` top hypotheses of a diagnosis
///
/// The catalog is the one of the diagnosed lift, `signals.lift_id`.
#[must_use]
pub fn accessories_for_signals(
    registry: &LiftRegistry,
    signals: &DiagnosticSignals,
    equipment: Equipment,
    max_limiters: usize,
) -> Vec<AccessoryExercise> {
    let limiters = signals.limiter_keys(max_limiters);
    approved_accessories(registry, &signals.lift_id, &limiters, equipment)
}
