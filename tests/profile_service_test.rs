// ABOUTME: Tests for profile onboarding, recalibration, reset and the status window
// ABOUTME: Checks stat derivation flows through to the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{log_days_ago, memory_resources, noon, sample_draft, today};
use pierre_quest::constants::storage_keys;
use pierre_quest::errors::ErrorCode;
use pierre_quest::intelligence::{ParameterStore, ScriptedRandom};
use pierre_quest::models::{ProfileDraft, RankLetter};

fn weaker_draft() -> ProfileDraft {
    let mut draft = sample_draft();
    draft.benchmarks.bench_kg = 40.0;
    draft.benchmarks.squat_kg = 50.0;
    draft.benchmarks.deadlift_kg = 60.0;
    draft
}

// ============================================================================
// Onboarding
// ============================================================================

#[test]
fn test_setup_derives_stats_and_rank() {
    let resources = memory_resources();
    let profile = resources.profile_service().setup(sample_draft()).unwrap();

    assert_eq!(profile.stats.strength, 80);
    assert_eq!(profile.stats.agility, 50);
    assert_eq!(profile.stats.vitality, 65);
    assert_eq!(profile.stats.perception, 10);
    assert!((profile.start_rank - 65.0).abs() < f64::EPSILON);
    assert!((profile.current_rank - 65.0).abs() < f64::EPSILON);
    assert_eq!(resources.storage.profile(), Some(profile));
}

#[test]
fn test_setup_rejects_blank_name() {
    let resources = memory_resources();
    let mut draft = sample_draft();
    draft.name = "   ".into();

    let error = resources.profile_service().setup(draft).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(resources.storage.profile().is_none());
}

#[test]
fn test_setup_rejects_non_finite_measurements() {
    let resources = memory_resources();
    let mut draft = sample_draft();
    draft.weight_kg = f64::NAN;

    let error = resources.profile_service().setup(draft).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_setup_with_zero_weight_uses_baseline_strength() {
    let resources = memory_resources();
    let mut draft = sample_draft();
    draft.weight_kg = 0.0;

    let profile = resources.profile_service().setup(draft).unwrap();
    assert_eq!(profile.stats.strength, 10);
}

// ============================================================================
// Recalibration
// ============================================================================

#[test]
fn test_update_recomputes_rank_and_keeps_start_rank() {
    let resources = memory_resources();
    let profiles = resources.profile_service();
    profiles.setup(sample_draft()).unwrap();

    let updated = profiles.update(weaker_draft()).unwrap();
    assert_eq!(updated.stats.strength, 40);
    assert_eq!(updated.stats.vitality, 45);
    assert!((updated.current_rank - 45.0).abs() < f64::EPSILON);
    assert!((updated.start_rank - 65.0).abs() < f64::EPSILON);
    assert_eq!(profiles.profile(), Some(updated));
}

#[test]
fn test_update_without_profile_is_rejected() {
    let resources = memory_resources();
    let error = resources.profile_service().update(sample_draft()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(resources.storage.profile().is_none());
}

#[test]
fn test_update_keeps_logs_and_quest() {
    let resources = memory_resources();
    let profiles = resources.profile_service();
    profiles.setup(sample_draft()).unwrap();
    resources
        .storage
        .add_log(log_days_ago(1, 120.0, 3, 7, 3))
        .unwrap();
    let quest = resources
        .quest_service()
        .active_quest(today(), &mut ScriptedRandom::constant(0.0))
        .unwrap();

    profiles.update(weaker_draft()).unwrap();
    assert_eq!(resources.storage.logs().len(), 1);
    assert_eq!(resources.storage.current_quest(), Some(quest));
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_clears_all_player_data() {
    let resources = memory_resources();
    let profiles = resources.profile_service();
    profiles.setup(sample_draft()).unwrap();
    resources
        .storage
        .add_log(log_days_ago(1, 120.0, 3, 7, 3))
        .unwrap();
    resources.storage.save_parameters("{}").unwrap();
    resources
        .quest_service()
        .active_quest(today(), &mut ScriptedRandom::constant(0.0))
        .unwrap();

    profiles.reset().unwrap();

    assert!(profiles.profile().is_none());
    assert!(resources.storage.logs().is_empty());
    assert!(resources.storage.current_quest().is_none());
    for key in storage_keys::ALL {
        assert!(resources.storage.backend().get(key).unwrap().is_none());
    }
}

// ============================================================================
// Status window
// ============================================================================

#[test]
fn test_status_window_summarizes_profile() {
    let resources = memory_resources();
    let profiles = resources.profile_service();
    profiles.setup(sample_draft()).unwrap();

    let status = profiles.status_window().unwrap();
    assert_eq!(status.name, "Sung Jin-Woo");
    assert_eq!(status.rank_letter, RankLetter::B);
    assert_eq!(status.xp, 6_500);
    assert_eq!(status.xp_ceiling, 10_000);
    assert_eq!(status.class_label, "INTERMEDIATE");
    assert_eq!(status.recent_volume, None);
    assert_eq!(status.sessions_logged, 0);
}

#[test]
fn test_status_window_tracks_completions() {
    let resources = memory_resources();
    let profiles = resources.profile_service();
    profiles.setup(sample_draft()).unwrap();
    let quests = resources.quest_service();

    let quest = quests
        .active_quest(today(), &mut ScriptedRandom::constant(0.0))
        .unwrap();
    for index in 0..quest.tasks.len() {
        quests.toggle_task(index).unwrap();
    }
    let completion = quests.complete_quest(noon(today())).unwrap();

    let status = profiles.status_window().unwrap();
    assert_eq!(status.sessions_logged, 1);
    assert_eq!(status.recent_volume, Some(completion.log.volume));
    assert_eq!(
        status.xp,
        (completion.profile.current_rank * 100.0).floor() as u32
    );
    assert!(status.xp > 6_500);
}

#[test]
fn test_status_window_requires_profile() {
    let resources = memory_resources();
    let error = resources.profile_service().status_window().unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}
