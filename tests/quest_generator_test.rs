// ABOUTME: Tests for daily, penalty and side quest generation
// ABOUTME: Verifies rank scaling, recovery discounts, reward draws and side quest catalogue picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{log_days_ago, profile_at_rank, today};
use pierre_quest::intelligence::quest_generator::{bodyweight_scale, running_target};
use pierre_quest::intelligence::recovery::{is_poor_recovery, recovery_score};
use pierre_quest::intelligence::{GeneratorConfig, QuestGenerator, ScriptedRandom};
use pierre_quest::models::{Quest, QuestKind, QuestStatus, RankLetter, RecoveryInputs};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn generator() -> QuestGenerator {
    QuestGenerator::new(GeneratorConfig::default())
}

fn target(quest: &Quest, name: &str) -> u32 {
    quest
        .tasks
        .iter()
        .find(|task| task.name == name)
        .map(|task| task.target)
        .unwrap_or_else(|| panic!("task {name} missing"))
}

// ============================================================================
// Daily quest scaling
// ============================================================================

#[test]
fn test_pushup_target_follows_rank_formula() {
    let generator = generator();
    let mut rng = ScriptedRandom::constant(0.0);
    for rank in 0..=100 {
        let rank = f64::from(rank);
        let quest = generator.generate_daily_quest(&profile_at_rank(rank), &[], today(), &mut rng);
        let expected = (50.0 * (1.0 + rank / 100.0 * 2.0)).floor() as u32;
        assert_eq!(target(&quest, "Push-ups"), expected, "rank {rank}");
        assert_eq!(target(&quest, "Sit-ups"), expected, "rank {rank}");
        assert_eq!(target(&quest, "Squats"), expected, "rank {rank}");
    }
}

#[test]
fn test_scale_endpoints() {
    assert!((bodyweight_scale(0.0) - 1.0).abs() < f64::EPSILON);
    assert!((bodyweight_scale(100.0) - 3.0).abs() < f64::EPSILON);
    assert_eq!(running_target(0.0), 5);
    assert_eq!(running_target(60.0), 6);
    assert_eq!(running_target(100.0), 7);
}

#[test]
fn test_daily_quest_shape() {
    let quest = generator().generate_daily_quest(
        &profile_at_rank(0.0),
        &[],
        today(),
        &mut ScriptedRandom::constant(0.0),
    );

    let names: Vec<&str> = quest.tasks.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["Push-ups", "Sit-ups", "Squats", "Running"]);
    let units: Vec<&str> = quest.tasks.iter().map(|task| task.unit.as_str()).collect();
    assert_eq!(units, ["reps", "reps", "reps", "km"]);
    assert!(quest.tasks.iter().all(|task| !task.completed));

    assert_eq!(quest.kind, QuestKind::Daily);
    assert_eq!(quest.status, QuestStatus::Pending);
    assert_eq!(quest.date, today());
    assert_eq!(quest.difficulty, RankLetter::E);
    assert_eq!(quest.xp_reward, 100);
    assert_eq!(quest.punishment, "PENALTY ZONE: Survival Quest (4 hours)");
    assert!(quest.stat_reward.is_none());
    assert_eq!(target(&quest, "Push-ups"), 50);
    assert_eq!(target(&quest, "Running"), 5);
}

#[test]
fn test_rank_sixty_with_poor_recovery() {
    let logs = vec![log_days_ago(1, 1000.0, 4, 5, 4)];
    let quest = generator().generate_daily_quest(
        &profile_at_rank(60.0),
        &logs,
        today(),
        &mut ScriptedRandom::constant(0.0),
    );

    assert_eq!(target(&quest, "Push-ups"), 88);
    assert_eq!(target(&quest, "Sit-ups"), 88);
    assert_eq!(target(&quest, "Squats"), 88);
    assert_eq!(target(&quest, "Running"), 6);
    assert_eq!(quest.difficulty, RankLetter::B);
    assert_eq!(quest.xp_reward, 220);
}

#[test]
fn test_good_recovery_has_no_discount() {
    let logs = vec![log_days_ago(1, 400.0, 1, 9, 1)];
    let quest = generator().generate_daily_quest(
        &profile_at_rank(60.0),
        &logs,
        today(),
        &mut ScriptedRandom::constant(0.0),
    );
    assert_eq!(target(&quest, "Push-ups"), 110);
}

#[test]
fn test_most_recent_log_drives_recovery() {
    // stored out of order: the newest entry is well recovered
    let logs = vec![
        log_days_ago(1, 300.0, 1, 9, 1),
        log_days_ago(3, 300.0, 5, 2, 5),
    ];
    let quest = generator().generate_daily_quest(
        &profile_at_rank(0.0),
        &logs,
        today(),
        &mut ScriptedRandom::constant(0.0),
    );
    assert_eq!(target(&quest, "Push-ups"), 50);

    let tired_last = vec![
        log_days_ago(3, 300.0, 1, 9, 1),
        log_days_ago(1, 300.0, 5, 2, 5),
    ];
    let quest = generator().generate_daily_quest(
        &profile_at_rank(0.0),
        &tired_last,
        today(),
        &mut ScriptedRandom::constant(0.0),
    );
    assert_eq!(target(&quest, "Push-ups"), 40);
    assert_eq!(target(&quest, "Running"), 5);
}

#[test]
fn test_recovery_score_threshold() {
    let score = recovery_score(RecoveryInputs {
        soreness: 4,
        sleep: 5,
        stress: 4,
    });
    assert!((score - 0.3).abs() < 1e-9);
    assert!(is_poor_recovery(score));

    let rested = recovery_score(RecoveryInputs {
        soreness: 2,
        sleep: 8,
        stress: 2,
    });
    assert!(!is_poor_recovery(rested));
    assert!(!is_poor_recovery(0.5));
    assert!(is_poor_recovery(0.499));
}

// ============================================================================
// Rewards
// ============================================================================

#[test]
fn test_reward_drawn_from_favorite_foods() {
    let mut profile = profile_at_rank(20.0);
    profile.favorite_foods = vec!["Ramen".into(), "Tacos".into(), "Curry".into()];

    let quest = generator().generate_daily_quest(
        &profile,
        &[],
        today(),
        &mut ScriptedRandom::constant(0.5),
    );
    assert_eq!(quest.reward, "Allowed to consume: Tacos");

    let quest = generator().generate_daily_quest(
        &profile,
        &[],
        today(),
        &mut ScriptedRandom::constant(0.99),
    );
    assert_eq!(quest.reward, "Allowed to consume: Curry");
}

#[test]
fn test_reward_falls_back_to_default_pool() {
    let profile = profile_at_rank(20.0);
    assert!(profile.favorite_foods.is_empty());

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..20 {
        let quest = generator().generate_daily_quest(&profile, &[], today(), &mut rng);
        let food = quest
            .reward
            .strip_prefix("Allowed to consume: ")
            .expect("reward prefix");
        assert!(["Pizza", "Burger", "Sushi", "Steak", "Ice Cream"].contains(&food));
    }
}

// ============================================================================
// Penalty and side quests
// ============================================================================

#[test]
fn test_penalty_quest() {
    let quest = generator().generate_penalty_quest(today());
    assert_eq!(quest.kind, QuestKind::Penalty);
    assert_eq!(quest.difficulty, RankLetter::S);
    assert_eq!(quest.xp_reward, 0);
    assert_eq!(quest.reward, "Status Recovery");
    assert_eq!(quest.punishment, "DEATH (Account Reset)");
    assert!(quest.id.starts_with("penalty-"));

    let tasks: Vec<(&str, u32, &str)> = quest
        .tasks
        .iter()
        .map(|task| (task.name.as_str(), task.target, task.unit.as_str()))
        .collect();
    assert_eq!(tasks, [("Survival Run", 10, "km"), ("Burpees", 100, "reps")]);
}

#[test]
fn test_side_quest_catalogue_pick() {
    let generator = generator();
    let first = generator.generate_side_quest(today(), &mut ScriptedRandom::constant(0.0));
    assert_eq!(first.tasks[0].name, "Shadow Boxing");
    assert_eq!(first.tasks[0].target, 5);
    assert_eq!(first.tasks[0].unit, "min");

    let last = generator.generate_side_quest(today(), &mut ScriptedRandom::constant(0.99));
    assert_eq!(last.tasks[0].name, "Meditation");

    let jacks = generator.generate_side_quest(today(), &mut ScriptedRandom::constant(0.55));
    assert_eq!(jacks.tasks[0].name, "Jumping Jacks");
    assert_eq!(jacks.tasks[0].unit, "reps");

    assert_eq!(first.kind, QuestKind::Side);
    assert_eq!(first.difficulty, RankLetter::E);
    assert_eq!(first.xp_reward, 20);
    assert_eq!(first.reward, "Instant Recovery (Small XP)");
    assert_eq!(first.punishment, "None");
    assert!(first.id.starts_with("side-"));
}

#[test]
fn test_side_quest_chance() {
    let generator = generator();
    assert!(generator.should_offer_side_quest(&mut ScriptedRandom::constant(0.1)));
    assert!(!generator.should_offer_side_quest(&mut ScriptedRandom::constant(0.2)));
    assert!(!generator.should_offer_side_quest(&mut ScriptedRandom::constant(0.9)));

    let never = QuestGenerator::new(GeneratorConfig {
        side_quest_chance: 0.0,
        ..GeneratorConfig::default()
    });
    assert!(!never.should_offer_side_quest(&mut ScriptedRandom::constant(0.0)));
}
