// ABOUTME: Engine-wide constants for e1RM estimation, signal versioning, and configuration
// ABOUTME: Organized by domain so each engine stage imports only what it needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One-rep-max estimation constants
pub mod e1rm {
    /// Reps above this are clamped before entering the Epley formula
    pub const MAX_REPS_FOR_ESTIMATE: u32 = 10;

    /// Sets of this many reps or fewer produce a high-confidence estimate
    pub const HIGH_CONFIDENCE_MAX_REPS: u32 = 4;
}

/// Versioning of the emitted `DiagnosticSignals` envelope
pub mod signals {
    /// Schema version of the output envelope
    pub const SIGNALS_VERSION: &str = "1.2.0";

    /// Constant units label for archetype deltas
    pub const DELTA_UNITS: &str = "index_points";

    /// Hypothesis key reported by the default validation test
    pub const GENERAL_STRENGTH_HYPOTHESIS: &str = "general_strength";

    /// Archetype label used when no decision row matches
    pub const UNDETERMINED_ARCHETYPE: &str = "undetermined";
}

/// Index and score bounds
pub mod scoring {
    /// Upper bound of every hypothesis score and the efficiency score
    pub const MAX_SCORE: f64 = 100.0;

    /// Upper bound of a strength index
    pub const MAX_INDEX: f64 = 100.0;

    /// Neutral index used as the reference when only one index exists
    pub const NEUTRAL_INDEX: f64 = 50.0;

    /// Efficiency score before deductions
    pub const EFFICIENCY_START: u32 = 100;
}

/// Environment variable names
pub mod env_config {
    /// Path to a YAML file replacing the embedded lift registry
    pub const LIFT_CONFIG_PATH: &str = "BARPATH_LIFT_CONFIG";
}

/// Service identification for structured logging
pub mod service_names {
    /// Canonical service name
    pub const BARPATH: &str = "barpath";
}
