// ABOUTME: Rank letter tiers derived from the 0-100 rank score
// ABOUTME: Shared by quest difficulty and the status window tier display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::rank::{
    A_THRESHOLD, B_THRESHOLD, C_THRESHOLD, D_THRESHOLD, MAX_RANK, MIN_RANK, S_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter tier for a rank score, lowest (E) to highest (S)
///
/// # Examples
///
/// ```rust
/// use pierre_quest_core::models::RankLetter;
///
/// assert_eq!(RankLetter::from_score(60.0), RankLetter::B);
/// assert_eq!(RankLetter::from_score(59.9), RankLetter::C);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankLetter {
    /// Below 30
    E,
    /// 30 to below 45
    D,
    /// 45 to below 60
    C,
    /// 60 to below 75
    B,
    /// 75 to below 90
    A,
    /// 90 and above
    S,
}

impl RankLetter {
    /// Map a rank score to its tier; boundary values belong to the higher tier
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= S_THRESHOLD {
            Self::S
        } else if score >= A_THRESHOLD {
            Self::A
        } else if score >= B_THRESHOLD {
            Self::B
        } else if score >= C_THRESHOLD {
            Self::C
        } else if score >= D_THRESHOLD {
            Self::D
        } else {
            Self::E
        }
    }

    /// Single-letter label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::E => "E",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
        }
    }
}

impl fmt::Display for RankLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a rank score into `[0, 100]`
#[must_use]
pub fn clamp_rank(score: f64) -> f64 {
    score.clamp(MIN_RANK, MAX_RANK)
}
