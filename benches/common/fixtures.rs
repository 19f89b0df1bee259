// ABOUTME: Benchmark fixtures generating realistic diagnostic engine inputs
// ABOUTME: Deterministic snapshot and flag generation for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for diagnostic engine inputs.

use barpath::models::{DiagnosticEngineInput, Equipment, ExerciseSnapshot, TrainingAge};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum InputBatchSize {
    /// Small batch (10 inputs), one lifter's week
    Small,
    /// Medium batch (100 inputs), a coach's roster
    Medium,
    /// Large batch (1000 inputs) for parallel throughput
    Large,
}

impl InputBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

/// Lift ids cycled by the generators
const LIFTS: [(&str, &[&str], &[&str]); 4] = [
    (
        "bench_press",
        &["close_grip_bench_press", "paused_bench_press", "incline_bench_press", "barbell_row"],
        &["bar_slows_at_lockout", "stalls_off_chest", "feet_slide"],
    ),
    (
        "squat",
        &["front_squat", "paused_squat", "good_morning"],
        &["hips_rise_first", "knees_cave", "loses_brace"],
    ),
    (
        "deadlift",
        &["deficit_deadlift", "block_pull", "romanian_deadlift"],
        &["slow_off_floor", "grip_fails", "hips_shoot_up"],
    ),
    (
        "overhead_press",
        &["push_press", "z_press", "bench_press"],
        &["excessive_layback", "bar_drifts_forward"],
    ),
];

/// Generate one fully populated input
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_input(index: usize) -> DiagnosticEngineInput {
    let (lift_id, secondaries, flags) = LIFTS[index % LIFTS.len()];
    let primary_weight = 185.0 + ((index * 37) % 200) as f64;
    let reps = 1 + (index % 12) as u32;

    let mut input = DiagnosticEngineInput::new(lift_id)
        .with_snapshot(ExerciseSnapshot::new(lift_id, primary_weight, reps).with_sets(3))
        .with_training_age(match index % 3 {
            0 => TrainingAge::Beginner,
            1 => TrainingAge::Intermediate,
            _ => TrainingAge::Advanced,
        })
        .with_equipment(match index % 3 {
            0 => Equipment::Home,
            1 => Equipment::Limited,
            _ => Equipment::Commercial,
        });

    for (offset, exercise_id) in secondaries.iter().enumerate() {
        let fraction = 0.65 + ((index + offset * 7) % 30) as f64 / 100.0;
        input = input.with_snapshot(ExerciseSnapshot::new(
            *exercise_id,
            (primary_weight * fraction).round(),
            1 + ((index + offset) % 8) as u32,
        ));
    }
    for (offset, flag) in flags.iter().enumerate() {
        input = input.with_flag(*flag, (index + offset) % 2 == 0);
    }
    input
}

/// Generate a batch of inputs cycling through every registered lift
#[must_use]
pub fn generate_inputs(size: InputBatchSize) -> Vec<DiagnosticEngineInput> {
    (0..size.count()).map(generate_input).collect()
}

/// Every snapshot of a generated batch as one session log
#[must_use]
pub fn generate_snapshots(size: InputBatchSize) -> Vec<ExerciseSnapshot> {
    generate_inputs(size)
        .into_iter()
        .flat_map(|input| input.snapshots)
        .collect()
}
