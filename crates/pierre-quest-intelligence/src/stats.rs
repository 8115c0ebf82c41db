// ABOUTME: Stat block and starting rank derivation from benchmark lifts
// ABOUTME: Tiered strength (bodyweight ratio + push-up bonus) and agility (burpee rate) scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Stat derivation runs at profile setup and edit only; quest rewards move stats
//! incrementally afterwards (see `progression`).

use pierre_quest_core::constants::stats::{
    AGILITY_BURPEE_TIERS, BASELINE_STAT, PUSHUP_BONUS_TIERS, STRENGTH_RATIO_TIERS,
};
use pierre_quest_core::models::{BenchmarkLifts, StatBlock};

/// Stats plus the overall rank they imply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatAssessment {
    /// Derived stat block
    pub stats: StatBlock,
    /// `floor((strength + agility + vitality) / 3)`
    pub rank: f64,
}

/// Total of the three lifts divided by bodyweight; zero for non-positive weight
#[must_use]
pub fn strength_ratio(benchmarks: &BenchmarkLifts, weight_kg: f64) -> f64 {
    if weight_kg > 0.0 {
        benchmarks.total_kg() / weight_kg
    } else {
        0.0
    }
}

/// Strength tier from the lift ratio plus push-up bonus, clamped to `[1, 100]`
#[must_use]
pub fn strength_score(benchmarks: &BenchmarkLifts, weight_kg: f64) -> u32 {
    let ratio = strength_ratio(benchmarks, weight_kg);
    let tier = STRENGTH_RATIO_TIERS
        .iter()
        .find(|(threshold, _)| ratio > *threshold)
        .map_or(BASELINE_STAT, |&(_, score)| score);
    let bonus = PUSHUP_BONUS_TIERS
        .iter()
        .find(|(threshold, _)| benchmarks.max_pushups > *threshold)
        .map_or(0, |&(_, bonus)| bonus);
    StatBlock::clamp_stat(tier + bonus)
}

/// Agility tier from max burpees per minute
#[must_use]
pub fn agility_score(benchmarks: &BenchmarkLifts) -> u32 {
    AGILITY_BURPEE_TIERS
        .iter()
        .find(|(threshold, _)| benchmarks.max_burpees_per_minute > *threshold)
        .map_or(BASELINE_STAT, |&(_, score)| score)
}

/// Derive the full stat block and overall rank
///
/// # Examples
///
/// ```rust
/// use pierre_quest_core::models::BenchmarkLifts;
/// use pierre_quest_intelligence::stats::assess;
///
/// let lifts = BenchmarkLifts {
///     bench_kg: 80.0,
///     squat_kg: 100.0,
///     deadlift_kg: 120.0,
///     ..BenchmarkLifts::default()
/// };
/// let assessment = assess(&lifts, 70.0);
/// assert_eq!(assessment.stats.strength, 80);
/// ```
#[must_use]
pub fn assess(benchmarks: &BenchmarkLifts, weight_kg: f64) -> StatAssessment {
    let strength = strength_score(benchmarks, weight_kg);
    let agility = agility_score(benchmarks);
    let vitality = (strength + agility) / 2;
    let stats = StatBlock {
        strength,
        agility,
        vitality,
        perception: BASELINE_STAT,
    };
    let rank = f64::from((strength + agility + vitality) / 3);
    StatAssessment { stats, rank }
}
