// ABOUTME: Daily workout log record appended on every quest completion
// ABOUTME: Carries volume and recovery inputs that feed the volume estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::recovery::{DEFAULT_SLEEP, DEFAULT_SORENESS, DEFAULT_STRESS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-reported recovery state attached to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryInputs {
    /// Muscle soreness, 1 (none) to 5 (severe)
    pub soreness: u8,
    /// Sleep quality, 1 (poor) to 10 (excellent)
    pub sleep: u8,
    /// Stress, 1 (calm) to 5 (high)
    pub stress: u8,
}

impl Default for RecoveryInputs {
    /// Placeholder values recorded when no recovery input step exists
    fn default() -> Self {
        Self {
            soreness: DEFAULT_SORENESS,
            sleep: DEFAULT_SLEEP,
            stress: DEFAULT_STRESS,
        }
    }
}

/// One completed session
///
/// The log store is append-only; storage order is timestamp order and defines
/// the estimator's training sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Unique identifier
    pub id: String,
    /// When the session was logged
    pub timestamp: DateTime<Utc>,
    /// Free-form workout label
    pub workout_type: String,
    /// Unit-less aggregate load (reps x load, or summed reps)
    pub volume: f64,
    /// Soreness, 1-5
    pub soreness: u8,
    /// Sleep quality, 1-10
    pub sleep: u8,
    /// Stress, 1-5
    pub stress: u8,
    /// XP earned by the session
    pub xp_gained: u32,
}

impl DailyLog {
    /// Create a log entry with a fresh identifier
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        workout_type: impl Into<String>,
        volume: f64,
        recovery: RecoveryInputs,
        xp_gained: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            workout_type: workout_type.into(),
            volume,
            soreness: recovery.soreness,
            sleep: recovery.sleep,
            stress: recovery.stress,
            xp_gained,
        }
    }

    /// Recovery fields of this entry
    #[must_use]
    pub const fn recovery(&self) -> RecoveryInputs {
        RecoveryInputs {
            soreness: self.soreness,
            sleep: self.sleep,
            stress: self.stress,
        }
    }
}
