// ABOUTME: Program-building rule table outputs: volume ceilings and accessory prescriptions
// ABOUTME: Returned by the volume table and accessory selector entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::training::Equipment;

/// Weekly set ceilings for one training-age tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeConstraints {
    /// Maximum total working sets
    pub max_total_sets: u32,
    /// Maximum compound-lift working sets
    pub max_compound_sets: u32,
    /// Maximum accessory working sets
    pub max_accessory_sets: u32,
}

/// An accessory exercise approved for a lifter's limiters and equipment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessoryExercise {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Minimum equipment tier required
    pub equipment: Equipment,
    /// Requested limiter keys this exercise addresses
    pub addresses: Vec<String>,
    /// Suggested working sets
    pub sets: u32,
    /// Suggested rep range (e.g. `6-8`)
    pub reps: String,
    /// Coaching cue
    pub cue: String,
}
