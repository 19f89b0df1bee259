// ABOUTME: Weekly volume ceilings tiered by training age
// ABOUTME: Total, compound, and accessory set caps; unknown tiers get the default row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barpath_core::models::{TrainingAge, VolumeConstraints};

const BEGINNER: VolumeConstraints = VolumeConstraints {
    max_total_sets: 12,
    max_compound_sets: 5,
    max_accessory_sets: 9,
};

const INTERMEDIATE: VolumeConstraints = VolumeConstraints {
    max_total_sets: 18,
    max_compound_sets: 8,
    max_accessory_sets: 12,
};

const ADVANCED: VolumeConstraints = VolumeConstraints {
    max_total_sets: 25,
    max_compound_sets: 10,
    max_accessory_sets: 18,
};

const UNSPECIFIED: VolumeConstraints = VolumeConstraints {
    max_total_sets: 15,
    max_compound_sets: 6,
    max_accessory_sets: 10,
};

/// Volume ceilings for a training-age tier
#[must_use]
pub const fn volume_constraints(training_age: TrainingAge) -> VolumeConstraints {
    match training_age {
        TrainingAge::Beginner => BEGINNER,
        TrainingAge::Intermediate => INTERMEDIATE,
        TrainingAge::Advanced => ADVANCED,
        TrainingAge::Unspecified => UNSPECIFIED,
    }
}

/// Volume ceilings for a free-form tier label; unknown labels get the default row
#[must_use]
pub fn volume_constraints_for_label(label: &str) -> VolumeConstraints {
    volume_constraints(TrainingAge::from_label(label))
}
