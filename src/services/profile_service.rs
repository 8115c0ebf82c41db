// ABOUTME: Profile onboarding, recalibration and status window assembly
// ABOUTME: Derives stats and rank from benchmarks and persists the single player profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::rank::{XP_DISPLAY_CEILING, XP_PER_RANK_POINT};
use crate::errors::{AppError, AppResult};
use crate::intelligence::stats::assess;
use crate::models::{Profile, ProfileDraft, RankLetter, StatBlock};
use crate::storage::LocalStorage;
use serde::Serialize;
use tracing::info;

/// Player-facing summary of rank, stats and training history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusWindow {
    /// Player name
    pub name: String,
    /// Current rank tier
    pub rank_letter: RankLetter,
    /// Current rank, 0-100
    pub rank: f64,
    /// `floor(rank * 100)`
    pub xp: u32,
    /// XP shown as the bar maximum
    pub xp_ceiling: u32,
    /// Experience level label, e.g. `BEGINNER`
    pub class_label: &'static str,
    /// Current stat block
    pub stats: StatBlock,
    /// Volume of the most recent session
    pub recent_volume: Option<f64>,
    /// Number of logged sessions
    pub sessions_logged: usize,
}

/// Profile lifecycle operations
#[derive(Clone)]
pub struct ProfileService {
    storage: LocalStorage,
}

impl ProfileService {
    /// Create a service over `storage`
    #[must_use]
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    fn validate(draft: &ProfileDraft) -> AppResult<()> {
        if draft.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        if !(draft.weight_kg.is_finite() && draft.height_cm.is_finite()) {
            return Err(AppError::invalid_input("weight and height must be finite"));
        }
        Ok(())
    }

    /// Stored profile, if onboarding has happened
    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.storage.profile()
    }

    /// Onboard a new player; start and current rank both take the derived rank
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or the profile cannot be saved
    pub fn setup(&self, draft: ProfileDraft) -> AppResult<Profile> {
        Self::validate(&draft)?;
        let assessment = assess(&draft.benchmarks, draft.weight_kg);
        let profile = Profile::from_draft(draft, assessment.stats, assessment.rank);
        self.storage.save_profile(&profile)?;
        info!(
            rank = profile.current_rank,
            strength = profile.stats.strength,
            agility = profile.stats.agility,
            "Profile created"
        );
        Ok(profile)
    }

    /// Recalibrate an existing profile from edited benchmarks
    ///
    /// Stats and current rank are recomputed; the start rank is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if no profile exists, the draft is invalid, or the
    /// profile cannot be saved
    pub fn update(&self, draft: ProfileDraft) -> AppResult<Profile> {
        let existing = self
            .storage
            .profile()
            .ok_or_else(|| AppError::not_found("profile"))?;
        Self::validate(&draft)?;
        let assessment = assess(&draft.benchmarks, draft.weight_kg);
        let mut profile = Profile::from_draft(draft, assessment.stats, assessment.rank);
        profile.start_rank = existing.start_rank;
        self.storage.save_profile(&profile)?;
        info!(
            rank_before = existing.current_rank,
            rank_after = profile.current_rank,
            "Profile recalibrated"
        );
        Ok(profile)
    }

    /// Delete profile, logs, active quest and estimator parameters
    ///
    /// # Errors
    ///
    /// Returns an error if any blob cannot be removed
    pub fn reset(&self) -> AppResult<()> {
        self.storage.clear_all()?;
        info!("All player data reset");
        Ok(())
    }

    /// Summary for the status screen
    ///
    /// # Errors
    ///
    /// Returns an error if no profile exists
    pub fn status_window(&self) -> AppResult<StatusWindow> {
        let profile = self
            .storage
            .profile()
            .ok_or_else(|| AppError::not_found("profile"))?;
        let logs = self.storage.logs();
        let recent_volume = logs
            .iter()
            .max_by_key(|log| log.timestamp)
            .map(|log| log.volume);

        Ok(StatusWindow {
            rank_letter: RankLetter::from_score(profile.current_rank),
            rank: profile.current_rank,
            xp: (profile.current_rank * XP_PER_RANK_POINT).floor() as u32,
            xp_ceiling: XP_DISPLAY_CEILING,
            class_label: profile.experience.class_label(),
            stats: profile.stats,
            recent_volume,
            sessions_logged: logs.len(),
            name: profile.name,
        })
    }
}
