// ABOUTME: Diagnostic orchestrator sequencing every engine stage into one deterministic call
// ABOUTME: Registry lookup, e1RM, ratios, hypotheses, phases, archetype, efficiency, validation, gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diagnostic Engine
//!
//! [`DiagnosticEngine`] borrows a [`LiftRegistry`] and turns one
//! [`DiagnosticEngineInput`] into a complete [`DiagnosticSignals`] record. The
//! only failure is an unregistered lift id; missing data degrades into
//! `data_gaps` and lower confidence instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use barpath_core::models::{DiagnosticEngineInput, ExerciseSnapshot};
//! use barpath_intelligence::run_diagnostic_engine;
//!
//! let input = DiagnosticEngineInput::new("bench_press")
//!     .with_snapshot(ExerciseSnapshot::new("bench_press", 225.0, 5))
//!     .with_flag("bar_slows_at_lockout", true);
//! let signals = run_diagnostic_engine(&input)?;
//! println!("{}", signals.primary_phase);
//! # Ok::<(), barpath_core::errors::AppError>(())
//! ```

use crate::accessories;
use crate::algorithms::{best_estimates, index_ratios, secondary_ratios};
use crate::archetype::classify;
use crate::config::LiftRegistry;
use crate::data_gaps::{self, DataGap};
use crate::efficiency::score_efficiency;
use crate::hypothesis::score_hypotheses;
use crate::phases::score_phases;
use crate::validation::select_test;
use barpath_core::constants::signals::SIGNALS_VERSION;
use barpath_core::errors::AppResult;
use barpath_core::models::{
    AccessoryExercise, DiagnosticEngineInput, DiagnosticSignals, Equipment,
};
use rayon::prelude::*;
use tracing::{debug, info_span};

/// Orchestrator bound to one registry
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine<'a> {
    registry: &'a LiftRegistry,
}

impl DiagnosticEngine<'static> {
    /// Engine over the process-wide registry
    #[must_use]
    pub fn global() -> Self {
        Self::new(LiftRegistry::global())
    }
}

impl<'a> DiagnosticEngine<'a> {
    /// Create an engine over `registry`
    #[must_use]
    pub const fn new(registry: &'a LiftRegistry) -> Self {
        Self { registry }
    }

    /// Registry this engine reads
    #[must_use]
    pub const fn registry(&self) -> &'a LiftRegistry {
        self.registry
    }

    /// Diagnose one lift
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigNotFound` when `input.lift_id` is not registered
    pub fn run(&self, input: &DiagnosticEngineInput) -> AppResult<DiagnosticSignals> {
        let _span = info_span!("diagnostic_engine", lift_id = %input.lift_id).entered();

        let lift = self.registry.lookup(&input.lift_id)?;

        let e1rms = best_estimates(&input.snapshots);
        debug!(
            snapshots = input.snapshots.len(),
            exercises = e1rms.len(),
            "Estimated one-rep maxes"
        );

        let ratios = secondary_ratios(lift, input.primary_exercise(), &e1rms);
        let indices = index_ratios(lift, &ratios);
        debug!(indices = indices.len(), "Computed ratio indices");

        let hypotheses = score_hypotheses(
            lift,
            &ratios,
            &input.flags,
            self.registry.scoring.max_hypotheses,
        );
        debug!(
            triggered = hypotheses.len(),
            top = hypotheses.first().map_or("none", |h| h.key.as_str()),
            "Scored hypotheses"
        );

        let phases = score_phases(lift, &hypotheses);
        debug!(
            primary_phase = %phases.primary_phase,
            confidence = phases.confidence,
            "Selected primary phase"
        );

        let dominance_archetype = classify(lift, &indices, &hypotheses);
        let gaps = data_gaps::detect(lift, input, &e1rms);
        let efficiency_score = score_efficiency(lift, &hypotheses, &gaps);
        let validation_test = select_test(lift, &hypotheses);
        debug!(
            archetype = %dominance_archetype.label,
            efficiency = efficiency_score.score,
            gaps = gaps.len(),
            "Diagnosis assembled"
        );

        Ok(DiagnosticSignals {
            signals_version: SIGNALS_VERSION.to_owned(),
            lift_config_version: self.registry.version.clone(),
            lift_id: input.lift_id.clone(),
            e1rms,
            indices,
            phase_scores: phases.phase_scores,
            primary_phase: phases.primary_phase,
            primary_phase_confidence: phases.confidence,
            hypothesis_scores: hypotheses,
            dominance_archetype,
            efficiency_score,
            validation_test,
            data_gaps: gaps.iter().map(DataGap::describe).collect(),
        })
    }

    /// Diagnose many inputs in parallel, one result per input in input order
    #[must_use]
    pub fn run_batch(&self, inputs: &[DiagnosticEngineInput]) -> Vec<AppResult<DiagnosticSignals>> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Approved accessories for explicit limiters
    #[must_use]
    pub fn approved_accessories<S: AsRef<str>>(
        &self,
        lift_id: &str,
        limiters: &[S],
        equipment: Equipment,
    ) -> Vec<AccessoryExercise> {
        accessories::approved_accessories(self.registry, lift_id, limiters, equipment)
    }

    /// Approved accessories for the top hypotheses of a diagnosis
    #[must_use]
    pub fn accessories_for_signals(
        &self,
        signals: &DiagnosticSignals,
        equipment: Equipment,
        max_limiters: usize,
    ) -> Vec<AccessoryExercise> {
        accessories::accessories_for_signals(self.registry, signals, equipment, max_limiters)
    }

    /// Every registered lift id in declaration order
    #[must_use]
    pub fn known_lift_ids(&self) -> Vec<&'a str> {
        self.registry.known_lift_ids()
    }
}

/// Diagnose one lift against the global registry
///
/// # Errors
///
/// Returns `ErrorCode::ConfigNotFound` with a "No lift config found" message
/// when `input.lift_id` is not registered
pub fn run_diagnostic_engine(input: &DiagnosticEngineInput) -> AppResult<DiagnosticSignals> {
    DiagnosticEngine::global().run(input)
}

/// Diagnose many inputs in parallel against the global registry
#[must_use]
pub fn run_diagnostic_batch(inputs: &[DiagnosticEngineInput]) -> Vec<AppResult<DiagnosticSignals>> {
    DiagnosticEngine::global().run_batch(inputs)
}

/// Approved accessories from the global registry; never fails
#[must_use]
pub fn recommend_accessories<S: AsRef<str>>(
    lift_id: &str,
    limiters: &[S],
    equipment: Equipment,
) -> Vec<AccessoryExercise> {
    DiagnosticEngine::global().approved_accessories(lift_id, limiters, equipment)
}

/// Every lift id in the global registry
#[must_use]
pub fn known_lift_ids() -> Vec<&'static str> {
    DiagnosticEngine::global().known_lift_ids()
}

#[cfg(test)]
mod tests {
    use super::*;
    use barpath_core::errors::ErrorCode;
    use barpath_core::models::ExerciseSnapshot;

    fn engine_registry() -> LiftRegistry {
        LiftRegistry::embedded().unwrap()
    }

    #[test]
    fn test_unknown_lift_fails_fast() {
        let registry = engine_registry();
        let engine = DiagnosticEngine::new(&registry);

        let error = engine
            .run(&DiagnosticEngineInput::new("unknown_lift"))
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_empty_snapshots_still_complete() {
        let registry = engine_registry();
        let engine = DiagnosticEngine::new(&registry);

        let signals = engine.run(&DiagnosticEngineInput::new("squat")).unwrap();

        assert_eq!(signals.primary_phase, "mid_range");
        assert!(signals.e1rms.is_empty());
        assert!(signals.hypothesis_scores.is_empty());
        assert_eq!(signals.validation_test.hypothesis_tested, "general_strength");
        assert_eq!(signals.efficiency_score.score, 74);
        assert_eq!(signals.data_gaps.len(), 3);
    }

    #[test]
    fn test_triceps_limited_bench() {
        let registry = engine_registry();
        let engine = DiagnosticEngine::new(&registry);
        let input = DiagnosticEngineInput::new("bench_press")
            .with_snapshot(ExerciseSnapshot::new("bench_press", 300.0, 1))
            .with_snapshot(ExerciseSnapshot::new("close_grip_bench_press", 240.0, 1))
            .with_flag("bar_slows_at_lockout", true);

        let signals = engine.run(&input).unwrap();
        let top = signals.top_hypothesis().unwrap();

        // 248 / 310 = 0.8 -> 9.09% below 0.88 -> 20 + 36 = 56, plus 25
        assert_eq!(top.key, "triceps_lockout_deficit");
        assert_eq!(top.score, 81);
        assert_eq!(signals.primary_phase, "lockout");
        assert_eq!(signals.dominance_archetype.label, "undetermined");
        assert_eq!(signals.validation_test.hypothesis_tested, "triceps_lockout_deficit");
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let registry = engine_registry();
        let engine = DiagnosticEngine::new(&registry);
        let inputs = vec![
            DiagnosticEngineInput::new("deadlift"),
            DiagnosticEngineInput::new("unknown_lift"),
            DiagnosticEngineInput::new("overhead_press"),
        ];

        let results = engine.run_batch(&inputs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().lift_id, "deadlift");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().lift_id, "overhead_press");
    }
}
