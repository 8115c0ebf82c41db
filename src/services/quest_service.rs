// ABOUTME: Quest state machine: daily issue, task toggling, completion, penalty and side quests
// ABOUTME: Completion appends a log, applies rewards and hands retraining to the scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Quest Service
//!
//! Transitions:
//!
//! - no quest or a quest from another day -> fresh daily quest (stale quest discarded)
//! - pending -> pending (`toggle_task`)
//! - pending with every task ticked -> completed (`complete_quest`)
//! - pending non-penalty -> pending penalty (`trigger_penalty`)
//!
//! Rejected transitions return a [`QuestError`] and leave storage untouched.

use super::training::TrainingScheduler;
use crate::constants::quest::COMPLETION_WORKOUT_TYPE;
use crate::errors::{AppError, AppResult, QuestError};
use crate::intelligence::progression::apply_quest_reward;
use crate::intelligence::{QuestGenerator, RandomSource, TrainingOutcome, VolumeEstimator, VolumeQuery};
use crate::logging::QuestLogger;
use crate::models::{DailyLog, Profile, Quest, QuestKind, QuestStatus, RecoveryInputs};
use crate::storage::LocalStorage;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Everything a successful completion produced
#[derive(Debug)]
pub struct QuestCompletion {
    /// The completed quest as stored
    pub quest: Quest,
    /// Log appended for the session
    pub log: DailyLog,
    /// Profile after rewards
    pub profile: Profile,
    /// Background retraining, when one was started
    pub training: Option<JoinHandle<TrainingOutcome>>,
}

/// Quest lifecycle operations over local storage
pub struct QuestService {
    storage: LocalStorage,
    generator: QuestGenerator,
    estimator: Arc<VolumeEstimator>,
    scheduler: Option<TrainingScheduler>,
}

impl QuestService {
    /// Create a service; without a scheduler completions never retrain
    #[must_use]
    pub fn new(
        storage: LocalStorage,
        generator: QuestGenerator,
        estimator: Arc<VolumeEstimator>,
        scheduler: Option<TrainingScheduler>,
    ) -> Self {
        Self {
            storage,
            generator,
            estimator,
            scheduler,
        }
    }

    fn require_profile(&self) -> AppResult<Profile> {
        self.storage
            .profile()
            .ok_or_else(|| AppError::not_found("profile"))
    }

    fn require_quest(&self) -> Result<Quest, QuestError> {
        self.storage.current_quest().ok_or(QuestError::NoActiveQuest)
    }

    fn require_pending(&self) -> Result<Quest, QuestError> {
        let quest = self.require_quest()?;
        if quest.is_pending() {
            Ok(quest)
        } else {
            Err(QuestError::NotPending {
                status: quest.status,
            })
        }
    }

    /// Quest for `today`, generating and persisting a daily quest if needed
    ///
    /// # Errors
    ///
    /// Returns an error if no profile exists or the new quest cannot be saved
    pub fn active_quest<R>(&self, today: NaiveDate, rng: &mut R) -> AppResult<Quest>
    where
        R: RandomSource + ?Sized,
    {
        let stored = self.storage.current_quest();
        if let Some(quest) = stored.as_ref().filter(|quest| quest.date == today) {
            return Ok(quest.clone());
        }

        let profile = self.require_profile()?;
        if let Some(stale) = &stored {
            QuestLogger::log_quest_replaced(stale);
        }
        let logs = self.storage.logs();
        let quest = self
            .generator
            .generate_daily_quest(&profile, &logs, today, rng);
        self.storage.save_quest(Some(&quest))?;
        QuestLogger::log_quest_issued(&quest);
        Ok(quest)
    }

    /// Flip the completion flag of task `index`
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pending quest, the index is out of range,
    /// or the quest cannot be saved
    pub fn toggle_task(&self, index: usize) -> AppResult<Quest> {
        let mut quest = self.require_pending()?;
        let len = quest.tasks.len();
        let task = quest
            .tasks
            .get_mut(index)
            .ok_or(QuestError::TaskIndexOutOfRange { index, len })?;
        task.completed = !task.completed;
        let completed = task.completed;
        debug!(quest.id = %quest.id, index, completed, "Task toggled");
        self.storage.save_quest(Some(&quest))?;
        Ok(quest)
    }

    /// Complete the active quest and apply its rewards
    ///
    /// Appends a session log, raises rank and stats, marks the quest completed
    /// and submits retraining on the full history. Training runs in the
    /// background; the returned handle may be ignored.
    ///
    /// # Errors
    ///
    /// Returns an error without changing anything if the quest is not pending,
    /// a task is unticked, or no profile exists. A failed storage write is
    /// surfaced after the writes before it are rolled back, so the completion
    /// can be retried
    pub fn complete_quest(&self, now: DateTime<Utc>) -> AppResult<QuestCompletion> {
        let mut quest = self.require_pending()?;
        if !quest.all_tasks_completed() {
            return Err(QuestError::TasksIncomplete {
                remaining: quest.remaining_tasks(),
            }
            .into());
        }
        let profile = self.require_profile()?;

        let log = DailyLog::new(
            now,
            COMPLETION_WORKOUT_TYPE,
            quest.rep_volume(),
            RecoveryInputs::default(),
            quest.xp_reward,
        );
        let updated = apply_quest_reward(&profile, &quest);
        quest.status = QuestStatus::Completed;
        self.commit_completion(&profile, &updated, &quest, log.clone())?;
        QuestLogger::log_quest_completed(&quest, profile.current_rank, updated.current_rank);

        let training = self
            .scheduler
            .as_ref()
            .and_then(|scheduler| scheduler.submit(self.storage.logs()));

        Ok(QuestCompletion {
            quest,
            log,
            profile: updated,
            training,
        })
    }

    /// Write log, profile and quest, restoring earlier writes if a later one fails
    fn commit_completion(
        &self,
        previous: &Profile,
        updated: &Profile,
        quest: &Quest,
        log: DailyLog,
    ) -> AppResult<()> {
        let history = self.storage.logs();
        self.storage.add_log(log)?;

        if let Err(error) = self.storage.save_profile(updated) {
            self.restore_logs(&history);
            return Err(error);
        }

        if let Err(error) = self.storage.save_quest(Some(quest)) {
            self.restore_logs(&history);
            if let Err(restore) = self.storage.save_profile(previous) {
                warn!(error = %restore, "Failed to restore profile after aborted completion");
            }
            return Err(error);
        }
        Ok(())
    }

    fn restore_logs(&self, history: &[DailyLog]) {
        if let Err(error) = self.storage.save_logs(history) {
            warn!(%error, "Failed to restore log history after aborted completion");
        }
    }

    /// Abandon the active quest and replace it with a penalty quest
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pending quest, the active quest is
    /// already a penalty, or the penalty quest cannot be saved
    pub fn trigger_penalty(&self, today: NaiveDate) -> AppResult<Quest> {
        let abandoned = self.require_pending()?;
        if abandoned.is_penalty() {
            return Err(QuestError::PenaltyAlreadyActive.into());
        }
        let penalty = self.generator.generate_penalty_quest(today);
        self.storage.save_quest(Some(&penalty))?;
        QuestLogger::log_penalty(&abandoned);
        Ok(penalty)
    }

    /// Roll for a side quest offer
    ///
    /// Nothing is persisted; pass the offer to [`Self::accept_side_quest`] to
    /// take it on. No offer is made while a penalty quest is active.
    pub fn offer_side_quest<R>(&self, today: NaiveDate, rng: &mut R) -> Option<Quest>
    where
        R: RandomSource + ?Sized,
    {
        if self
            .storage
            .current_quest()
            .is_some_and(|quest| quest.is_penalty())
        {
            return None;
        }
        if !self.generator.should_offer_side_quest(rng) {
            return None;
        }
        let quest = self.generator.generate_side_quest(today, rng);
        debug!(quest.id = %quest.id, "Side quest offered");
        Some(quest)
    }

    /// Make an offered side quest the active quest
    ///
    /// # Errors
    ///
    /// Returns an error if `quest` is not a pending side quest, a pending
    /// penalty quest is active, or the quest cannot be saved
    pub fn accept_side_quest(&self, quest: Quest) -> AppResult<Quest> {
        if quest.kind != QuestKind::Side {
            return Err(QuestError::NotASideQuest { quest_id: quest.id }.into());
        }
        if !quest.is_pending() {
            return Err(QuestError::NotPending {
                status: quest.status,
            }
            .into());
        }
        if self
            .storage
            .current_quest()
            .is_some_and(|active| active.is_penalty() && active.is_pending())
        {
            return Err(QuestError::PenaltyAlreadyActive.into());
        }
        self.storage.save_quest(Some(&quest))?;
        QuestLogger::log_quest_issued(&quest);
        Ok(quest)
    }

    /// Predicted volume for the next session, from the most recent log
    #[must_use]
    pub fn forecast_volume(&self) -> Option<f64> {
        let logs = self.storage.logs();
        let latest = logs.iter().max_by_key(|log| log.timestamp)?;
        Some(self.estimator.predict(&VolumeQuery::from_log(latest)))
    }
}
