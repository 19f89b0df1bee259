// ABOUTME: Validation test selection for the top-ranked hypothesis
// ABOUTME: Falls back to the lift's general strength check when nothing triggered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::LiftConfig;
use barpath_core::constants::signals::GENERAL_STRENGTH_HYPOTHESIS;
use barpath_core::models::{HypothesisScore, ValidationTest};

/// Configured protocol for the top hypothesis, verbatim
#[must_use]
pub fn select_test(lift: &LiftConfig, hypotheses: &[HypothesisScore]) -> ValidationTest {
    hypotheses
        .first()
        .and_then(|top| {
            lift.hypothesis(&top.key)
                .map(|rule| rule.validation_test.to_test(&top.key))
        })
        .unwrap_or_else(|| {
            lift.default_validation_test
                .to_test(GENERAL_STRENGTH_HYPOTHESIS)
        })
}
