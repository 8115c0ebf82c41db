// ABOUTME: Background scheduler moving estimator training onto the tokio blocking pool
// ABOUTME: Drops submissions while a pass is in flight so callers never wait on training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::{TrainingOutcome, VolumeEstimator};
use crate::models::DailyLog;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Submits estimator training to a tokio runtime's blocking pool
#[derive(Clone)]
pub struct TrainingScheduler {
    estimator: Arc<VolumeEstimator>,
    runtime: Handle,
}

impl TrainingScheduler {
    /// Create a scheduler targeting `runtime`
    #[must_use]
    pub fn new(estimator: Arc<VolumeEstimator>, runtime: Handle) -> Self {
        Self { estimator, runtime }
    }

    /// Start a training pass over `logs` in the background
    ///
    /// Returns `None` when a pass is already running. The returned handle may
    /// be awaited or dropped; dropping it does not cancel training.
    #[must_use]
    pub fn submit(&self, logs: Vec<DailyLog>) -> Option<JoinHandle<TrainingOutcome>> {
        if self.estimator.is_training() {
            debug!("Estimator busy, training submission dropped");
            return None;
        }
        let estimator = Arc::clone(&self.estimator);
        debug!(logs = logs.len(), "Submitting estimator training");
        Some(self.runtime.spawn_blocking(move || estimator.train(&logs)))
    }
}
