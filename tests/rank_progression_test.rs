// ABOUTME: Tests for rank letter tiers, stat derivation and quest reward application
// ABOUTME: Covers tier boundaries, strength/agility tables and rank clamping at 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{profile_at_rank, sample_benchmarks, today};
use pierre_quest::intelligence::progression::{
    apply_quest_reward, rank_after_reward, stats_after_reward,
};
use pierre_quest::intelligence::stats::{agility_score, assess, strength_ratio, strength_score};
use pierre_quest::models::{
    clamp_rank, BenchmarkLifts, Quest, QuestKind, QuestStatus, QuestTask, RankLetter, StatBlock,
    StatReward,
};

fn finished_quest(xp_reward: u32, stat_reward: Option<StatReward>) -> Quest {
    Quest {
        id: "quest-under-test".into(),
        date: today(),
        kind: QuestKind::Daily,
        tasks: vec![QuestTask {
            completed: true,
            ..QuestTask::new("Push-ups", 50, "reps")
        }],
        difficulty: RankLetter::E,
        reward: "Allowed to consume: Pizza".into(),
        punishment: "None".into(),
        status: QuestStatus::Pending,
        xp_reward,
        stat_reward,
    }
}

// ============================================================================
// Rank letters
// ============================================================================

#[test]
fn test_rank_letter_boundaries_belong_to_higher_tier() {
    assert_eq!(RankLetter::from_score(0.0), RankLetter::E);
    assert_eq!(RankLetter::from_score(29.99), RankLetter::E);
    assert_eq!(RankLetter::from_score(30.0), RankLetter::D);
    assert_eq!(RankLetter::from_score(45.0), RankLetter::C);
    assert_eq!(RankLetter::from_score(59.9), RankLetter::C);
    assert_eq!(RankLetter::from_score(60.0), RankLetter::B);
    assert_eq!(RankLetter::from_score(75.0), RankLetter::A);
    assert_eq!(RankLetter::from_score(89.999), RankLetter::A);
    assert_eq!(RankLetter::from_score(90.0), RankLetter::S);
    assert_eq!(RankLetter::from_score(100.0), RankLetter::S);
}

#[test]
fn test_rank_letter_is_total_and_monotonic() {
    let mut previous = RankLetter::E;
    for step in 0..=1000 {
        let letter = RankLetter::from_score(f64::from(step) / 10.0);
        assert!(letter >= previous, "tier dropped at score {step}");
        previous = letter;
    }
}

#[test]
fn test_rank_letter_serializes_as_single_letter() {
    assert_eq!(serde_json::to_string(&RankLetter::S).unwrap(), "\"S\"");
    let parsed: RankLetter = serde_json::from_str("\"B\"").unwrap();
    assert_eq!(parsed, RankLetter::B);
    assert_eq!(RankLetter::C.to_string(), "C");
}

#[test]
fn test_clamp_rank() {
    assert!((clamp_rank(120.0) - 100.0).abs() < f64::EPSILON);
    assert!(clamp_rank(-3.0).abs() < f64::EPSILON);
    assert!((clamp_rank(42.5) - 42.5).abs() < f64::EPSILON);
}

// ============================================================================
// Stat derivation
// ============================================================================

#[test]
fn test_strength_from_onboarding_example() {
    let lifts = BenchmarkLifts {
        bench_kg: 80.0,
        squat_kg: 100.0,
        deadlift_kg: 120.0,
        ..BenchmarkLifts::default()
    };
    assert_eq!(strength_score(&lifts, 70.0), 80);
}

#[test]
fn test_strength_tiers_and_pushup_bonus() {
    let lifts = |total: f64, max_pushups: u32| BenchmarkLifts {
        bench_kg: total,
        max_pushups,
        ..BenchmarkLifts::default()
    };

    assert_eq!(strength_score(&lifts(50.0, 0), 100.0), 10);
    assert_eq!(strength_score(&lifts(150.0, 0), 100.0), 20);
    assert_eq!(strength_score(&lifts(250.0, 0), 100.0), 40);
    assert_eq!(strength_score(&lifts(350.0, 0), 100.0), 60);
    assert_eq!(strength_score(&lifts(450.0, 0), 100.0), 80);
    assert_eq!(strength_score(&lifts(550.0, 0), 100.0), 95);

    // exactly 5.0 is not above 5.0
    assert_eq!(strength_score(&lifts(500.0, 0), 100.0), 80);

    assert_eq!(strength_score(&lifts(50.0, 41), 100.0), 15);
    assert_eq!(strength_score(&lifts(50.0, 61), 100.0), 20);
    assert_eq!(strength_score(&lifts(550.0, 61), 100.0), 100);
}

#[test]
fn test_non_positive_weight_yields_zero_ratio() {
    let lifts = sample_benchmarks();
    assert!(strength_ratio(&lifts, 0.0).abs() < f64::EPSILON);
    assert!(strength_ratio(&lifts, -5.0).abs() < f64::EPSILON);
    assert_eq!(strength_score(&lifts, 0.0), 10);
}

#[test]
fn test_agility_tiers() {
    let burpees = |max_burpees_per_minute| BenchmarkLifts {
        max_burpees_per_minute,
        ..BenchmarkLifts::default()
    };
    assert_eq!(agility_score(&burpees(5)), 10);
    assert_eq!(agility_score(&burpees(10)), 10);
    assert_eq!(agility_score(&burpees(11)), 30);
    assert_eq!(agility_score(&burpees(21)), 50);
    assert_eq!(agility_score(&burpees(31)), 80);
}

#[test]
fn test_assessment_derives_vitality_and_rank() {
    let assessment = assess(&sample_benchmarks(), 70.0);
    assert_eq!(
        assessment.stats,
        StatBlock {
            strength: 80,
            agility: 50,
            vitality: 65,
            perception: 10,
        }
    );
    assert!((assessment.rank - 65.0).abs() < f64::EPSILON);
}

#[test]
fn test_assessment_rank_is_floored() {
    // strength 15, agility 10, vitality 12 -> 37 / 3 = 12.33
    let odd = BenchmarkLifts {
        bench_kg: 50.0,
        max_pushups: 41,
        max_burpees_per_minute: 5,
        ..BenchmarkLifts::default()
    };
    let assessment = assess(&odd, 100.0);
    assert_eq!(assessment.stats.vitality, 12);
    assert!((assessment.rank - 12.0).abs() < f64::EPSILON);

    // strength 20, agility 30, vitality 25 -> 25
    let lifts = BenchmarkLifts {
        bench_kg: 150.0,
        max_burpees_per_minute: 12,
        ..BenchmarkLifts::default()
    };
    assert!((assess(&lifts, 100.0).rank - 25.0).abs() < f64::EPSILON);

    // strength 95 + 10 clamps to 100, agility 80, vitality 90 -> 90
    let strong = BenchmarkLifts {
        bench_kg: 600.0,
        max_pushups: 80,
        max_burpees_per_minute: 40,
        ..BenchmarkLifts::default()
    };
    let assessment = assess(&strong, 100.0);
    assert_eq!(assessment.stats.strength, 100);
    assert_eq!(assessment.stats.vitality, 90);
    assert!((assessment.rank - 90.0).abs() < f64::EPSILON);
}

// ============================================================================
// Reward application
// ============================================================================

#[test]
fn test_rank_rises_by_xp_over_one_hundred() {
    assert!((rank_after_reward(60.0, 220) - 62.2).abs() < 1e-9);
    assert!((rank_after_reward(60.0, 0) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_rank_never_exceeds_one_hundred() {
    for rank in [0.0, 50.0, 97.5, 99.99, 100.0] {
        for xp in [0, 20, 100, 300, 10_000] {
            assert!(rank_after_reward(rank, xp) <= 100.0);
        }
    }
}

#[test]
fn test_stat_reward_is_clamped() {
    let stats = StatBlock {
        strength: 98,
        agility: 40,
        vitality: 50,
        perception: 10,
    };
    let reward = StatReward {
        strength: Some(5),
        agility: Some(3),
        vitality: None,
        perception: Some(0),
    };
    let updated = stats_after_reward(stats, &reward);
    assert_eq!(updated.strength, 100);
    assert_eq!(updated.agility, 43);
    assert_eq!(updated.vitality, 50);
    assert_eq!(updated.perception, 10);
}

#[test]
fn test_apply_quest_reward_updates_rank_and_stats() {
    let profile = profile_at_rank(99.5);
    let quest = finished_quest(
        300,
        Some(StatReward {
            agility: Some(2),
            ..StatReward::default()
        }),
    );

    let updated = apply_quest_reward(&profile, &quest);
    assert!((updated.current_rank - 100.0).abs() < f64::EPSILON);
    assert!((updated.start_rank - 99.5).abs() < f64::EPSILON);
    assert_eq!(updated.stats.agility, profile.stats.agility + 2);
    assert_eq!(updated.stats.strength, profile.stats.strength);
}

#[test]
fn test_apply_quest_reward_without_stat_reward_keeps_stats() {
    let profile = profile_at_rank(10.0);
    let updated = apply_quest_reward(&profile, &finished_quest(100, None));
    assert_eq!(updated.stats, profile.stats);
    assert!((updated.current_rank - 11.0).abs() < 1e-9);
}
