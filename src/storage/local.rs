// ABOUTME: Typed facade over the key-value backend for the four persisted blobs
// ABOUTME: Corrupt or unreadable blobs read as absent with a warning; writes surface errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::constants::storage_keys;
use crate::errors::{AppResult, StorageError};
use crate::intelligence::ParameterStore;
use crate::models::{DailyLog, Profile, Quest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed access to profile, logs, active quest and estimator parameters
#[derive(Clone)]
pub struct LocalStorage {
    backend: Arc<dyn KeyValueStore>,
}

impl LocalStorage {
    /// Wrap a backend
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Whether writes persist beyond this process
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Underlying backend
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "Failed to read local storage, treating as absent");
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "Discarding corrupt local storage entry");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let encoded =
            serde_json::to_string(value).map_err(|error| StorageError::serialization(key, error))?;
        self.backend.set(key, &encoded)?;
        debug!(key, bytes = encoded.len(), "Persisted local storage entry");
        Ok(())
    }

    /// Stored profile, if any
    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.read_json(storage_keys::PROFILE)
    }

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be encoded or written
    pub fn save_profile(&self, profile: &Profile) -> AppResult<()> {
        self.write_json(storage_keys::PROFILE, profile)
    }

    /// Stored active quest, if any
    #[must_use]
    pub fn current_quest(&self) -> Option<Quest> {
        self.read_json(storage_keys::ACTIVE_QUEST)
    }

    /// Replace the active quest; `None` clears it
    ///
    /// # Errors
    ///
    /// Returns an error if the quest cannot be encoded or written
    pub fn save_quest(&self, quest: Option<&Quest>) -> AppResult<()> {
        match quest {
            Some(quest) => self.write_json(storage_keys::ACTIVE_QUEST, quest),
            None => Ok(self.backend.remove(storage_keys::ACTIVE_QUEST)?),
        }
    }

    /// Log history in insertion order; empty when absent or corrupt
    #[must_use]
    pub fn logs(&self) -> Vec<DailyLog> {
        self.read_json(storage_keys::LOGS).unwrap_or_default()
    }

    /// Append a log to the history
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be encoded or written
    pub fn add_log(&self, log: DailyLog) -> AppResult<()> {
        let mut logs = self.logs();
        logs.push(log);
        self.save_logs(&logs)
    }

    /// Replace the whole log history
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be encoded or written
    pub fn save_logs(&self, logs: &[DailyLog]) -> AppResult<()> {
        self.write_json(storage_keys::LOGS, logs)
    }

    /// Delete all four blobs
    ///
    /// # Errors
    ///
    /// Returns an error if any key cannot be removed
    pub fn clear_all(&self) -> AppResult<()> {
        self.backend.clear(&storage_keys::ALL)?;
        debug!("Cleared all local storage entries");
        Ok(())
    }
}

impl ParameterStore for LocalStorage {
    fn load_parameters(&self) -> Option<String> {
        self.read_raw(storage_keys::MODEL)
    }

    fn save_parameters(&self, blob: &str) -> AppResult<()> {
        Ok(self.backend.set(storage_keys::MODEL, blob)?)
    }
}
