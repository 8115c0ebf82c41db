// ABOUTME: Applies quest completion rewards to the profile's rank and stat block
// ABOUTME: Rank rises by xp/100 and is clamped to 100; stat deltas are clamped to [1, 100]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_quest_core::constants::rank::XP_PER_RANK_POINT;
use pierre_quest_core::models::{clamp_rank, Profile, Quest, StatBlock, StatReward};

/// Rank after adding `xp_reward / 100`, never above 100
#[must_use]
pub fn rank_after_reward(current_rank: f64, xp_reward: u32) -> f64 {
    clamp_rank(current_rank + f64::from(xp_reward) / XP_PER_RANK_POINT)
}

/// Add each present delta to its stat
#[must_use]
pub fn stats_after_reward(stats: StatBlock, reward: &StatReward) -> StatBlock {
    let bump = |value: u32, delta: Option<u32>| {
        delta.map_or(value, |delta| StatBlock::clamp_stat(value.saturating_add(delta)))
    };
    StatBlock {
        strength: bump(stats.strength, reward.strength),
        agility: bump(stats.agility, reward.agility),
        vitality: bump(stats.vitality, reward.vitality),
        perception: bump(stats.perception, reward.perception),
    }
}

/// Profile with the quest's XP and stat rewards applied
#[must_use]
pub fn apply_quest_reward(profile: &Profile, quest: &Quest) -> Profile {
    let mut updated = profile.clone();
    updated.current_rank = rank_after_reward(profile.current_rank, quest.xp_reward);
    if let Some(reward) = &quest.stat_reward {
        updated.stats = stats_after_reward(profile.stats, reward);
    }
    updated
}
