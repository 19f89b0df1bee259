// ABOUTME: Secondary-to-primary strength ratios and their 0-100 band indices
// ABOUTME: Normalizes each recognized secondary e1RM against the primary lift e1RM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_to;
use crate::config::LiftConfig;
use barpath_core::models::{E1rmResult, RatioIndex};
use std::collections::BTreeMap;

/// Decimal places kept on a reported ratio
pub(crate) const RATIO_DECIMALS: i32 = 3;

/// Decimal places kept on an index
const INDEX_DECIMALS: i32 = 1;

/// Unrounded `e1rm(secondary) / e1rm(primary)` for every configured secondary with an estimate
///
/// Threshold tests run against these values; only the reported ratio is rounded.
/// Returns an empty map when the primary exercise has no estimate.
#[must_use]
pub fn secondary_ratios(
    lift: &LiftConfig,
    primary_exercise: &str,
    e1rms: &BTreeMap<String, E1rmResult>,
) -> BTreeMap<String, f64> {
    let Some(primary) = e1rms.get(primary_exercise).filter(|e| e.value > 0) else {
        return BTreeMap::new();
    };
    let primary_value = f64::from(primary.value);

    lift.secondaries
        .iter()
        .filter(|secondary| secondary.exercise_id != primary_exercise)
        .filter_map(|secondary| {
            let estimate = e1rms.get(&secondary.exercise_id)?;
            Some((
                secondary.exercise_id.clone(),
                f64::from(estimate.value) / primary_value,
            ))
        })
        .collect()
}

/// Map exact ratios onto their configured bands
#[must_use]
pub fn index_ratios(
    lift: &LiftConfig,
    ratios: &BTreeMap<String, f64>,
) -> BTreeMap<String, RatioIndex> {
    lift.secondaries
        .iter()
        .filter_map(|secondary| {
            let ratio = *ratios.get(&secondary.exercise_id)?;
            let band = secondary.expected_ratio;
            Some((
                secondary.exercise_id.clone(),
                RatioIndex {
                    ratio: round_to(ratio, RATIO_DECIMALS),
                    index: round_to(band.interpolate(ratio), INDEX_DECIMALS),
                    expected_low: band.low,
                    expected_high: band.high,
                    axis: secondary.axis.clone(),
                },
            ))
        })
        .collect()
}

/// Ratio indices for every secondary present in both `e1rms` and the lift config
///
/// Returns an empty map when the primary exercise has no estimate.
#[must_use]
pub fn compute_indices(
    lift: &LiftConfig,
    primary_exercise: &str,
    e1rms: &BTreeMap<String, E1rmResult>,
) -> BTreeMap<String, RatioIndex> {
    index_ratios(lift, &secondary_ratios(lift, primary_exercise, e1rms))
}
