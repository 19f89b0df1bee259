// ABOUTME: Training age and equipment tier enumerations
// ABOUTME: Strict FromStr parsing plus lenient label mapping for caller-supplied strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Self-reported training experience tier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingAge {
    /// Under roughly one year of structured training
    Beginner,
    /// One to three years of structured training
    Intermediate,
    /// Three or more years of structured training
    Advanced,
    /// Not reported
    #[default]
    Unspecified,
}

impl TrainingAge {
    /// Map any label to a tier, treating unknown labels as `Unspecified`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Unspecified)
    }

    /// Canonical lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unspecified => "unspecified",
        }
    }
}

impl FromStr for TrainingAge {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "unspecified" => Ok(Self::Unspecified),
            other => Err(AppError::invalid_input(format!(
                "Unknown training age: {other}. Valid options: beginner, intermediate, advanced, unspecified"
            ))),
        }
    }
}

impl fmt::Display for TrainingAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Available-equipment classification
///
/// Tiers form a strict hierarchy: everything available at `Home` is available
/// at `Limited`, and everything at `Limited` is available at `Commercial`.
/// The derived `Ord` follows declaration order, so `required <= available`
/// is the compatibility test.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Bodyweight, bands, dumbbells
    Home,
    /// Barbell, rack, and bench
    Limited,
    /// Full gym: machines, cables, specialty bars
    #[default]
    Commercial,
}

impl Equipment {
    /// Whether an exercise requiring `required` can be performed with `self`
    #[must_use]
    pub fn provides(self, required: Self) -> bool {
        required <= self
    }

    /// Map any label to a tier, treating unknown labels as the most restrictive tier
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Home)
    }

    /// Canonical lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Limited => "limited",
            Self::Commercial => "commercial",
        }
    }
}

impl FromStr for Equipment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "limited" => Ok(Self::Limited),
            "commercial" => Ok(Self::Commercial),
            other => Err(AppError::invalid_input(format!(
                "Unknown equipment tier: {other}. Valid options: home, limited, commercial"
            ))),
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
