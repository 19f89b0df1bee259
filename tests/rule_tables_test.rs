// ABOUTME: Integration tests for the volume ceiling table and the accessory selector
// ABOUTME: Tier values, label fallbacks, equipment hierarchy, limiter filtering, diagnosis hand-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use barpath::accessories::{accessories_for_signals, approved_accessories};
use barpath::models::{DiagnosticEngineInput, Equipment, TrainingAge, VolumeConstraints};
use barpath::{volume_constraints, volume_constraints_for_label, DiagnosticEngine, LiftRegistry};

fn registry() -> LiftRegistry {
    LiftRegistry::embedded().unwrap()
}

fn ids(accessories: &[barpath::models::AccessoryExercise]) -> Vec<&str> {
    accessories.iter().map(|a| a.id.as_str()).collect()
}

// ============================================================================
// Volume ceilings
// ============================================================================

#[test]
fn test_volume_tier_values() {
    let cases = [
        (TrainingAge::Beginner, 12, 5, 9),
        (TrainingAge::Intermediate, 18, 8, 12),
        (TrainingAge::Advanced, 25, 10, 18),
        (TrainingAge::Unspecified, 15, 6, 10),
    ];

    for (training_age, total, compound, accessory) in cases {
        assert_eq!(
            volume_constraints(training_age),
            VolumeConstraints {
                max_total_sets: total,
                max_compound_sets: compound,
                max_accessory_sets: accessory,
            },
            "{training_age}"
        );
    }
}

#[test]
fn test_volume_ceilings_grow_with_experience() {
    let beginner = volume_constraints(TrainingAge::Beginner);
    let intermediate = volume_constraints(TrainingAge::Intermediate);
    let advanced = volume_constraints(TrainingAge::Advanced);

    assert!(beginner.max_total_sets < intermediate.max_total_sets);
    assert!(intermediate.max_total_sets < advanced.max_total_sets);
    assert!(beginner.max_compound_sets < advanced.max_compound_sets);
    assert!(beginner.max_accessory_sets < advanced.max_accessory_sets);
}

#[test]
fn test_volume_labels_fall_back_to_default_row() {
    let default_row = volume_constraints(TrainingAge::Unspecified);

    assert_eq!(volume_constraints_for_label(" Advanced "), volume_constraints(TrainingAge::Advanced));
    assert_eq!(volume_constraints_for_label("elite"), default_row);
    assert_eq!(volume_constraints_for_label(""), default_row);
}

#[test]
fn test_volume_constraints_serialize_camel_case() {
    let json = serde_json::to_value(volume_constraints(TrainingAge::Intermediate)).unwrap();

    assert_eq!(json["maxTotalSets"], 18);
    assert_eq!(json["maxCompoundSets"], 8);
    assert_eq!(json["maxAccessorySets"], 12);
}

// ============================================================================
// Accessory selection
// ============================================================================

#[test]
fn test_equipment_hierarchy_is_monotonic() {
    let registry = registry();
    let limiters = ["triceps_lockout_deficit"];

    let home = approved_accessories(&registry, "bench_press", &limiters, Equipment::Home);
    let limited = approved_accessories(&registry, "bench_press", &limiters, Equipment::Limited);
    let commercial = approved_accessories(&registry, "bench_press", &limiters, Equipment::Commercial);

    assert_eq!(ids(&home), vec!["dumbbell_floor_press"]);
    assert_eq!(
        ids(&limited),
        vec!["jm_press", "board_press", "dumbbell_floor_press"]
    );
    assert_eq!(
        ids(&commercial),
        vec![
            "jm_press",
            "board_press",
            "dumbbell_floor_press",
            "cable_triceps_pushdown"
        ]
    );
    for accessory in &home {
        assert!(limited.contains(accessory));
    }
    for accessory in &limited {
        assert!(commercial.contains(accessory));
    }
}

#[test]
fn test_multiple_limiters_keep_catalog_order() {
    let registry = registry();

    let selected = approved_accessories(
        &registry,
        "bench_press",
        &["upper_back_stability", "chest_off_chest_weakness"],
        Equipment::Home,
    );

    assert_eq!(
        ids(&selected),
        vec!["dumbbell_bench_press", "dumbbell_row", "band_pull_apart"]
    );
    assert_eq!(selected[0].addresses, vec!["chest_off_chest_weakness".to_owned()]);
}

#[test]
fn test_accessory_prescriptions_are_complete() {
    let registry = registry();

    for lift_id in registry.known_lift_ids() {
        let lift = registry.lookup(lift_id).unwrap();
        let limiters: Vec<&str> = lift.hypotheses.iter().map(|rule| rule.key.as_str()).collect();

        let selected = approved_accessories(&registry, lift_id, &limiters, Equipment::Commercial);

        assert_eq!(selected.len(), lift.accessories.len(), "{lift_id}");
        for accessory in selected {
            assert!(accessory.sets > 0);
            assert!(!accessory.reps.is_empty());
            assert!(!accessory.cue.is_empty());
            assert!(!accessory.addresses.is_empty());
        }
    }
}

#[test]
fn test_unmatched_inputs_return_empty() {
    let registry = registry();
    let none: Vec<String> = Vec::new();

    assert!(approved_accessories(&registry, "squat", &none, Equipment::Commercial).is_empty());
    assert!(approved_accessories(&registry, "squat", &["not_a_limiter"], Equipment::Commercial)
        .is_empty());
    assert!(approved_accessories(&registry, "curl", &["quad_strength_deficit"], Equipment::Commercial)
        .is_empty());
    // rules from another lift never match
    assert!(approved_accessories(&registry, "squat", &["grip_limit"], Equipment::Commercial)
        .is_empty());
}

#[test]
fn test_unknown_equipment_label_is_most_restrictive() {
    assert_eq!(Equipment::from_label("garage"), Equipment::Home);
    assert!("garage".parse::<Equipment>().is_err());
    assert_eq!("Commercial".parse::<Equipment>().unwrap(), Equipment::Commercial);
}

#[test]
fn test_accessories_follow_diagnosis_limiters() {
    let registry = registry();
    let engine = DiagnosticEngine::new(&registry);
    let input = DiagnosticEngineInput::new("squat")
        .with_flag("knees_cave", true)
        .with_flag("loses_brace", true)
        .with_equipment(Equipment::Home);

    let signals = engine.run(&input).unwrap();
    let selected = accessories_for_signals(&registry, &signals, input.equipment, 2);

    assert_eq!(
        signals.limiter_keys(2),
        vec!["knee_valgus_stability".to_owned(), "bracing_breakdown".to_owned()]
    );
    assert_eq!(
        ids(&selected),
        vec![
            "bulgarian_split_squat",
            "banded_lateral_walk",
            "dead_bug",
            "suitcase_carry"
        ]
    );
    assert_eq!(
        selected,
        engine.accessories_for_signals(&signals, Equipment::Home, 2)
    );
}

#[test]
fn test_limiter_cap_narrows_selection() {
    let registry = registry();
    let engine = DiagnosticEngine::new(&registry);
    let signals = engine
        .run(
            &DiagnosticEngineInput::new("squat")
                .with_flag("knees_cave", true)
                .with_flag("loses_brace", true),
        )
        .unwrap();

    let selected = engine.accessories_for_signals(&signals, Equipment::Home, 1);

    assert_eq!(ids(&selected), vec!["bulgarian_split_squat", "banded_lateral_walk"]);
    assert!(engine
        .accessories_for_signals(&signals, Equipment::Home, 0)
        .is_empty());
}

#[test]
fn test_signal_accessories_come_from_diagnosed_lift() {
    let registry = registry();
    let engine = DiagnosticEngine::new(&registry);
    let signals = engine
        .run(&DiagnosticEngineInput::new("deadlift").with_flag("grip_fails", true))
        .unwrap();

    let selected = engine.accessories_for_signals(&signals, Equipment::Limited, 1);

    assert_eq!(signals.limiter_keys(1), vec!["grip_limit".to_owned()]);
    assert_eq!(ids(&selected), vec!["farmers_carry", "double_overhand_hold"]);
    assert!(
        approved_accessories(&registry, "squat", &["grip_limit"], Equipment::Limited).is_empty()
    );
}

#[test]
fn test_global_recommendations_match_embedded_catalog() {
    let selected = barpath::recommend_accessories("deadlift", &["grip_limit"], Equipment::Limited);

    assert_eq!(ids(&selected), vec!["farmers_carry", "double_overhand_hold"]);
}
