// ABOUTME: Configuration error types for lift registry loading and validation
// ABOUTME: Defines error variants for invalid bands, unknown references, and phase weight sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for lift registry validation.

use barpath_core::errors::AppError;
use std::env;
use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Expected ratio band is empty or non-positive
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Required configuration field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Phase weights don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// A rule names an exercise, phase, or hypothesis its lift does not declare
    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    /// Registry file could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File that failed to open
        path: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Registry document is not valid YAML for the registry schema
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
