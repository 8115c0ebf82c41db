// ABOUTME: Daily, penalty and side quest generation scaled to rank and recent recovery
// ABOUTME: Randomness (reward food, side quest pick) comes from an injected RandomSource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Quest Generator
//!
//! Bodyweight targets scale from 1x at rank 0 to 3x at rank 100, running from
//! 1x to 1.5x. Poor recovery on the most recent session trims the three rep
//! targets by 20%; the run is never discounted.

use crate::config::GeneratorConfig;
use crate::random::RandomSource;
use crate::recovery::{is_poor_recovery, recovery_score};
use chrono::NaiveDate;
use pierre_quest_core::constants::quest::{
    BASE_DAILY_XP, BASE_PUSHUPS, BASE_RUN_KM, BASE_SITUPS, BASE_SQUATS, BODYWEIGHT_SCALE_SPAN,
    DAILY_PUNISHMENT, PENALTY_BURPEES, PENALTY_PUNISHMENT, PENALTY_REWARD, PENALTY_RUN_KM,
    POOR_RECOVERY_MULTIPLIER, RUN_SCALE_DIVISOR, SIDE_QUEST_PUNISHMENT, SIDE_QUEST_REWARD,
    SIDE_QUEST_TASKS, SIDE_QUEST_XP,
};
use pierre_quest_core::constants::units;
use pierre_quest_core::models::{
    DailyLog, Profile, Quest, QuestKind, QuestStatus, QuestTask, RankLetter,
};
use tracing::debug;
use uuid::Uuid;

/// Bodyweight multiplier for `rank`: `1 + (rank / 100) * 2`
#[must_use]
pub fn bodyweight_scale(rank: f64) -> f64 {
    1.0 + (rank / 100.0) * BODYWEIGHT_SCALE_SPAN
}

/// Running distance for `rank`: `floor(5 * (1 + rank / 200))`
#[must_use]
pub fn running_target(rank: f64) -> u32 {
    (BASE_RUN_KM * (1.0 + rank / RUN_SCALE_DIVISOR)).floor() as u32
}

fn scaled_reps(base: f64, scale: f64, poor_recovery: bool) -> u32 {
    let scaled = (base * scale).floor();
    if poor_recovery {
        (scaled * POOR_RECOVERY_MULTIPLIER).floor() as u32
    } else {
        scaled as u32
    }
}

/// Builds quests from a profile, its log history and a random source
#[derive(Debug, Clone, Default)]
pub struct QuestGenerator {
    config: GeneratorConfig,
}

impl QuestGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generator configuration
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate today's daily quest
    ///
    /// The most recent log (by timestamp, later entries winning ties) drives
    /// the recovery discount; an empty history means no discount.
    pub fn generate_daily_quest<R>(
        &self,
        profile: &Profile,
        logs: &[DailyLog],
        today: NaiveDate,
        rng: &mut R,
    ) -> Quest
    where
        R: RandomSource + ?Sized,
    {
        let rank = profile.current_rank;
        let scale = bodyweight_scale(rank);

        let recovery = logs
            .iter()
            .max_by_key(|log| log.timestamp)
            .map(|log| recovery_score(log.recovery()));
        let poor_recovery = recovery.is_some_and(is_poor_recovery);

        let tasks = vec![
            QuestTask::new("Push-ups", scaled_reps(BASE_PUSHUPS, scale, poor_recovery), units::REPS),
            QuestTask::new("Sit-ups", scaled_reps(BASE_SITUPS, scale, poor_recovery), units::REPS),
            QuestTask::new("Squats", scaled_reps(BASE_SQUATS, scale, poor_recovery), units::REPS),
            QuestTask::new("Running", running_target(rank), units::KM),
        ];

        let food = self.pick_reward_food(profile, rng);
        let difficulty = RankLetter::from_score(rank);
        let xp_reward = (BASE_DAILY_XP * scale).floor() as u32;

        debug!(
            rank,
            %difficulty,
            xp_reward,
            poor_recovery,
            recovery = recovery.unwrap_or_default(),
            "Generated daily quest"
        );

        Quest {
            id: Uuid::new_v4().to_string(),
            date: today,
            kind: QuestKind::Daily,
            tasks,
            difficulty,
            reward: format!("Allowed to consume: {food}"),
            punishment: DAILY_PUNISHMENT.to_owned(),
            status: QuestStatus::Pending,
            xp_reward,
            stat_reward: None,
        }
    }

    fn pick_reward_food<R>(&self, profile: &Profile, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let pool: Vec<&str> = if profile.favorite_foods.is_empty() {
            self.config.default_reward_foods.iter().map(String::as_str).collect()
        } else {
            profile.favorite_foods.iter().map(String::as_str).collect()
        };
        if pool.is_empty() {
            return String::from("Anything");
        }
        pool[rng.next_index(pool.len())].to_owned()
    }

    /// Penalty quest replacing an abandoned daily quest
    #[must_use]
    pub fn generate_penalty_quest(&self, today: NaiveDate) -> Quest {
        Quest {
            id: format!("penalty-{}", Uuid::new_v4()),
            date: today,
            kind: QuestKind::Penalty,
            tasks: vec![
                QuestTask::new("Survival Run", PENALTY_RUN_KM, units::KM),
                QuestTask::new("Burpees", PENALTY_BURPEES, units::REPS),
            ],
            difficulty: RankLetter::S,
            reward: PENALTY_REWARD.to_owned(),
            punishment: PENALTY_PUNISHMENT.to_owned(),
            status: QuestStatus::Pending,
            xp_reward: 0,
            stat_reward: None,
        }
    }

    /// Short optional quest picked uniformly from the side quest catalogue
    pub fn generate_side_quest<R>(&self, today: NaiveDate, rng: &mut R) -> Quest
    where
        R: RandomSource + ?Sized,
    {
        let (name, target, unit) = SIDE_QUEST_TASKS[rng.next_index(SIDE_QUEST_TASKS.len())];
        Quest {
            id: format!("side-{}", Uuid::new_v4()),
            date: today,
            kind: QuestKind::Side,
            tasks: vec![QuestTask::new(name, target, unit)],
            difficulty: RankLetter::E,
            reward: SIDE_QUEST_REWARD.to_owned(),
            punishment: SIDE_QUEST_PUNISHMENT.to_owned(),
            status: QuestStatus::Pending,
            xp_reward: SIDE_QUEST_XP,
            stat_reward: None,
        }
    }

    /// Roll the configured side quest chance
    pub fn should_offer_side_quest<R>(&self, rng: &mut R) -> bool
    where
        R: RandomSource + ?Sized,
    {
        rng.chance(self.config.side_quest_chance)
    }
}
