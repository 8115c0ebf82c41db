// ABOUTME: Core data models for the quest engine
// ABOUTME: Re-exports profile, daily log, quest and rank letter types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records persisted as JSON blobs in local storage. Serde field names are the
//! on-disk contract, so renames here are schema changes.

/// Daily workout log records
pub mod daily_log;
/// Player profile, benchmarks and stat block
pub mod profile;
/// Quest, task and stat reward definitions
pub mod quest;
/// Rank letter tiers
pub mod rank;

pub use daily_log::{DailyLog, RecoveryInputs};
pub use profile::{BenchmarkLifts, ExperienceLevel, FitnessGoal, Profile, ProfileDraft, StatBlock};
pub use quest::{Quest, QuestKind, QuestStatus, QuestTask, StatReward};
pub use rank::{clamp_rank, RankLetter};
