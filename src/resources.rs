// ABOUTME: Centralized resource container wiring storage, estimator and scheduler together
// ABOUTME: Builds the profile and quest services from a single configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Quest Resources
//!
//! Shared handles built once at startup. The estimator is loaded from storage
//! here and shared by every service; nothing is held in a global.

use crate::config::QuestConfig;
use crate::intelligence::{QuestGenerator, VolumeEstimator};
use crate::services::{ProfileService, QuestService, TrainingScheduler};
use crate::storage::{create_store, KeyValueStore, LocalStorage};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

/// Shared engine resources
#[derive(Clone)]
pub struct QuestResources {
    /// Configuration the resources were built from
    pub config: Arc<QuestConfig>,
    /// Typed storage facade
    pub storage: LocalStorage,
    /// Shared volume estimator
    pub estimator: Arc<VolumeEstimator>,
    /// Background trainer; absent when no runtime was supplied
    pub scheduler: Option<TrainingScheduler>,
}

impl QuestResources {
    /// Build resources over an explicit backend
    ///
    /// Without a runtime handle, quest completion still works but never
    /// retrains the estimator.
    #[must_use]
    pub fn new(
        config: QuestConfig,
        backend: Arc<dyn KeyValueStore>,
        runtime: Option<Handle>,
    ) -> Self {
        let storage = LocalStorage::new(backend);
        let estimator = Arc::new(VolumeEstimator::load(
            config.intelligence.estimator.clone(),
            Arc::new(storage.clone()),
        ));
        let scheduler =
            runtime.map(|handle| TrainingScheduler::new(Arc::clone(&estimator), handle));

        info!(
            persistent = storage.is_available(),
            estimator_trained = estimator.is_trained(),
            background_training = scheduler.is_some(),
            "Quest resources initialized"
        );

        Self {
            config: Arc::new(config),
            storage,
            estimator,
            scheduler,
        }
    }

    /// Build resources with the backend named in `config`
    #[must_use]
    pub fn from_config(config: QuestConfig, runtime: Option<Handle>) -> Self {
        let backend = create_store(&config);
        Self::new(config, backend, runtime)
    }

    /// Profile service over the shared storage
    #[must_use]
    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.storage.clone())
    }

    /// Quest service over the shared storage and estimator
    #[must_use]
    pub fn quest_service(&self) -> QuestService {
        QuestService::new(
            self.storage.clone(),
            QuestGenerator::new(self.config.intelligence.generator.clone()),
            Arc::clone(&self.estimator),
            self.scheduler.clone(),
        )
    }
}
