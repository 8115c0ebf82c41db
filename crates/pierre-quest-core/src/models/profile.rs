// ABOUTME: Player profile with body metrics, benchmark lifts and derived stat block
// ABOUTME: ProfileDraft carries onboarding/edit input before stats and rank are derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::stats::{BASELINE_STAT, MAX_STAT, MIN_STAT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Training goal chosen at onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    /// Gain mass
    Bulk,
    /// Lose fat
    Cut,
    /// Hold current composition
    Maintain,
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Less than a year of training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three years or more
    Advanced,
}

impl ExperienceLevel {
    /// Upper-case label shown as the player class
    #[must_use]
    pub const fn class_label(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

/// Benchmark results used to derive the stat block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkLifts {
    /// Bench press one-rep max (kg)
    pub bench_kg: f64,
    /// Back squat one-rep max (kg)
    pub squat_kg: f64,
    /// Deadlift one-rep max (kg)
    pub deadlift_kg: f64,
    /// Max push-ups in one set
    pub max_pushups: u32,
    /// Max burpees in one minute
    pub max_burpees_per_minute: u32,
    /// 5 km run time in seconds, if tested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_km_seconds: Option<u32>,
}

impl BenchmarkLifts {
    /// Sum of the three one-rep maxes (kg)
    #[must_use]
    pub fn total_kg(&self) -> f64 {
        self.bench_kg + self.squat_kg + self.deadlift_kg
    }
}

const fn baseline_stat() -> u32 {
    BASELINE_STAT
}

/// Derived attribute scores, each in `[1, 100]`
///
/// Stats are recomputed from benchmarks at setup and edit, and otherwise only
/// move through quest stat rewards. A stat missing from a persisted blob reads
/// as the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Bodyweight-relative strength
    #[serde(default = "baseline_stat")]
    pub strength: u32,
    /// Conditioning and quickness
    #[serde(default = "baseline_stat")]
    pub agility: u32,
    /// Overall durability
    #[serde(default = "baseline_stat")]
    pub vitality: u32,
    /// Awareness; not derived from any input yet
    #[serde(default = "baseline_stat")]
    pub perception: u32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            strength: BASELINE_STAT,
            agility: BASELINE_STAT,
            vitality: BASELINE_STAT,
            perception: BASELINE_STAT,
        }
    }
}

impl StatBlock {
    /// Clamp a raw stat value into the legal range
    #[must_use]
    pub fn clamp_stat(value: u32) -> u32 {
        value.clamp(MIN_STAT, MAX_STAT)
    }
}

/// Onboarding or edit input, before stats and rank are derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Display name
    pub name: String,
    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Training goal
    pub goal: FitnessGoal,
    /// Training experience
    pub experience: ExperienceLevel,
    /// Benchmark results
    pub benchmarks: BenchmarkLifts,
    /// Foods drawn as daily quest rewards
    #[serde(default)]
    pub favorite_foods: Vec<String>,
}

/// The single player profile of an installation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Training goal
    pub goal: FitnessGoal,
    /// Training experience
    pub experience: ExperienceLevel,
    /// Benchmark results
    pub benchmarks: BenchmarkLifts,
    /// Derived attribute scores
    #[serde(default)]
    pub stats: StatBlock,
    /// Rank assigned at onboarding, 0-100
    pub start_rank: f64,
    /// Current rank, 0-100; only decreases through recalibration
    pub current_rank: f64,
    /// Foods drawn as daily quest rewards
    #[serde(default)]
    pub favorite_foods: Vec<String>,
}

impl Profile {
    /// Build a profile from a draft plus derived stats and rank
    #[must_use]
    pub fn from_draft(draft: ProfileDraft, stats: StatBlock, rank: f64) -> Self {
        Self {
            name: draft.name,
            date_of_birth: draft.date_of_birth,
            weight_kg: draft.weight_kg,
            height_cm: draft.height_cm,
            goal: draft.goal,
            experience: draft.experience,
            benchmarks: draft.benchmarks,
            stats,
            start_rank: rank,
            current_rank: rank,
            favorite_foods: draft.favorite_foods,
        }
    }
}
