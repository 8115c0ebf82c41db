// ABOUTME: Quest, task and stat reward definitions
// ABOUTME: Encodes the pending/completed lifecycle and rep-volume aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::rank::RankLetter;
use crate::constants::units;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quest category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestKind {
    /// Scheduled quest for the calendar day
    Daily,
    /// Optional short quest offered at random
    Side,
    /// Punishment for abandoning a daily quest
    Penalty,
}

/// Quest lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    /// Tasks may still be toggled
    Pending,
    /// Terminal; reward applied
    Completed,
    /// Reserved; stale quests are replaced rather than failed
    Failed,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        })
    }
}

/// One line item of a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestTask {
    /// Exercise name
    pub name: String,
    /// Target amount in `unit`
    pub target: u32,
    /// `reps`, `km` or `min`
    pub unit: String,
    /// Whether the player ticked this task
    pub completed: bool,
}

impl QuestTask {
    /// Create an uncompleted task
    #[must_use]
    pub fn new(name: impl Into<String>, target: u32, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target,
            unit: unit.into(),
            completed: false,
        }
    }

    /// Whether this task counts toward rep volume
    #[must_use]
    pub fn is_reps(&self) -> bool {
        self.unit == units::REPS
    }
}

/// Optional stat deltas granted on completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatReward {
    /// Strength delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    /// Agility delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<u32>,
    /// Vitality delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitality: Option<u32>,
    /// Perception delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perception: Option<u32>,
}

/// The active unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier
    pub id: String,
    /// Calendar day the quest belongs to (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Daily, side or penalty
    #[serde(rename = "type")]
    pub kind: QuestKind,
    /// Ordered task list
    pub tasks: Vec<QuestTask>,
    /// Difficulty tier
    pub difficulty: RankLetter,
    /// Reward flavor text
    pub reward: String,
    /// Punishment flavor text
    pub punishment: String,
    /// Lifecycle status
    pub status: QuestStatus,
    /// XP granted on completion; rank rises by `xp_reward / 100`
    pub xp_reward: u32,
    /// Stat deltas granted on completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_reward: Option<StatReward>,
}

impl Quest {
    /// Whether tasks may still change
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == QuestStatus::Pending
    }

    /// Whether this is a penalty quest
    #[must_use]
    pub fn is_penalty(&self) -> bool {
        self.kind == QuestKind::Penalty
    }

    /// Number of tasks not yet ticked
    #[must_use]
    pub fn remaining_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Whether every task is ticked
    #[must_use]
    pub fn all_tasks_completed(&self) -> bool {
        self.remaining_tasks() == 0
    }

    /// Sum of targets over `reps` tasks; distance and time tasks are excluded
    #[must_use]
    pub fn rep_volume(&self) -> f64 {
        self.tasks
            .iter()
            .filter(|task| task.is_reps())
            .map(|task| f64::from(task.target))
            .sum()
    }
}
