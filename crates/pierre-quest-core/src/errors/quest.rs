// ABOUTME: Quest state-machine rejection errors
// ABOUTME: Raised when a transition is attempted from an illegal quest state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::QuestStatus;
use thiserror::Error;

/// Rejected quest transitions
///
/// The calling surface is expected to prevent these; the engine still refuses
/// them without mutating the profile, the log store or the quest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestError {
    /// No quest is stored as active
    #[error("no active quest")]
    NoActiveQuest,

    /// Operation requires a pending quest
    #[error("quest is {status}, expected pending")]
    NotPending {
        /// Current status of the active quest
        status: QuestStatus,
    },

    /// Completion attempted with unfinished tasks
    #[error("{remaining} task(s) still incomplete")]
    TasksIncomplete {
        /// Number of tasks not yet completed
        remaining: usize,
    },

    /// Task index does not exist on the active quest
    #[error("task index {index} out of range for {len} task(s)")]
    TaskIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of tasks on the quest
        len: usize,
    },

    /// Penalty requested while a penalty quest is already active
    #[error("penalty quest already active")]
    PenaltyAlreadyActive,

    /// Only side quests can be accepted as an interruption
    #[error("quest {quest_id} is not a side quest")]
    NotASideQuest {
        /// Identifier of the rejected quest
        quest_id: String,
    },
}
