// ABOUTME: Next-session volume estimator trained on the player's own log history
// ABOUTME: Falls back to a 2% progressive-overload heuristic until trained; one training pass at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Estimator
//!
//! Maps today's volume and recovery state to the volume the player is expected
//! to handle next session. The estimator is an explicitly owned component:
//! callers construct it with a [`ParameterStore`] and share it behind an `Arc`.
//!
//! Training always starts from a freshly initialized network seeded from
//! [`EstimatorConfig::seed`], so identical log histories produce identical
//! parameters. Prediction never waits on training; it reads whichever model
//! snapshot was last published.

use crate::config::EstimatorConfig;
use crate::dataset::{TrainingSet, VolumeQuery};
use crate::error::EstimatorError;
use crate::network::{FeedForwardNetwork, FitOptions, NetworkParameters};
use pierre_quest_core::constants::estimator::FALLBACK_OVERLOAD;
use pierre_quest_core::errors::AppResult;
use pierre_quest_core::models::DailyLog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Persistence seam for the estimator's parameter blob
///
/// The blob is opaque to every other component; only the estimator reads or
/// writes it.
pub trait ParameterStore: Send + Sync {
    /// Load the persisted blob, `None` when absent or unreadable
    fn load_parameters(&self) -> Option<String>;

    /// Persist the blob
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    fn save_parameters(&self, blob: &str) -> AppResult<()>;
}

/// Result of a training request
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingOutcome {
    /// New parameters published and persisted
    Trained {
        /// Training pairs used
        samples: usize,
        /// Mean loss of the final epoch
        final_loss: f64,
    },
    /// Fewer logs than required; stored parameters untouched
    InsufficientData {
        /// Logs available
        available: usize,
        /// Logs required
        required: usize,
    },
    /// Another pass was in flight; request dropped
    AlreadyRunning,
    /// Training diverged; previous parameters kept
    Failed {
        /// Failure description
        reason: String,
    },
}

/// Clears the busy flag when a training pass ends, including on unwind
struct TrainingGuard<'a>(&'a AtomicBool);

impl Drop for TrainingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Next-session volume estimator
pub struct VolumeEstimator {
    config: EstimatorConfig,
    store: Arc<dyn ParameterStore>,
    model: RwLock<Option<Arc<FeedForwardNetwork>>>,
    training: AtomicBool,
}

impl VolumeEstimator {
    /// Create an estimator and restore persisted parameters if present
    ///
    /// A missing, corrupt or schema-mismatched blob leaves the estimator
    /// untrained; that is never an error.
    #[must_use]
    pub fn load(config: EstimatorConfig, store: Arc<dyn ParameterStore>) -> Self {
        let model = store
            .load_parameters()
            .and_then(|blob| match Self::decode(&blob, config.dropout_rate) {
                Ok(network) => {
                    debug!("Restored estimator parameters from local storage");
                    Some(Arc::new(network))
                }
                Err(error) => {
                    warn!(%error, "Discarding unreadable estimator parameters");
                    None
                }
            });

        Self {
            config,
            store,
            model: RwLock::new(model),
            training: AtomicBool::new(false),
        }
    }

    fn decode(blob: &str, dropout_rate: f64) -> Result<FeedForwardNetwork, EstimatorError> {
        let parameters: NetworkParameters = serde_json::from_str(blob)?;
        FeedForwardNetwork::from_parameters(parameters, dropout_rate)
    }

    /// Estimator configuration
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Whether learned parameters are available
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Whether a training pass is in flight
    #[must_use]
    pub fn is_training(&self) -> bool {
        self.training.load(Ordering::Acquire)
    }

    fn snapshot(&self) -> Option<Arc<FeedForwardNetwork>> {
        self.model
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Predict next-session volume
    ///
    /// Untrained estimators (and non-finite network outputs) return
    /// `current_volume * 1.02`.
    #[must_use]
    pub fn predict(&self, query: &VolumeQuery) -> f64 {
        let fallback = query.current_volume * FALLBACK_OVERLOAD;
        let Some(network) = self.snapshot() else {
            return fallback;
        };
        let predicted = network.predict(&query.features());
        if predicted.is_finite() {
            predicted
        } else {
            warn!(predicted, "Estimator produced a non-finite prediction");
            fallback
        }
    }

    /// Retrain from scratch on the full log history
    ///
    /// Runs synchronously on the calling thread; `TrainingScheduler` in the
    /// main crate moves it onto a blocking worker. A second call while a pass
    /// is in flight returns [`TrainingOutcome::AlreadyRunning`] immediately.
    pub fn train(&self, logs: &[DailyLog]) -> TrainingOutcome {
        let required = self.config.min_training_logs;
        if logs.len() < required {
            warn!(
                available = logs.len(),
                required, "Not enough data to train estimator"
            );
            return TrainingOutcome::InsufficientData {
                available: logs.len(),
                required,
            };
        }

        if self
            .training
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Estimator training already in progress, dropping request");
            return TrainingOutcome::AlreadyRunning;
        }
        let _guard = TrainingGuard(&self.training);

        let dataset = TrainingSet::from_logs(logs);
        info!(samples = dataset.len(), "Starting estimator training");
        let started = Instant::now();

        match self.fit(&dataset) {
            Ok((network, final_loss)) => {
                self.publish(network);
                info!(
                    samples = dataset.len(),
                    final_loss,
                    elapsed_ms = started.elapsed().as_millis(),
                    "Estimator training complete"
                );
                TrainingOutcome::Trained {
                    samples: dataset.len(),
                    final_loss,
                }
            }
            Err(error) => {
                warn!(%error, "Estimator training failed, keeping previous parameters");
                TrainingOutcome::Failed {
                    reason: error.to_string(),
                }
            }
        }
    }

    fn fit(&self, dataset: &TrainingSet) -> Result<(FeedForwardNetwork, f64), EstimatorError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut network = FeedForwardNetwork::new(self.config.dropout_rate, &mut rng);
        let history = network.fit(
            &dataset.inputs,
            &dataset.labels,
            FitOptions {
                epochs: self.config.epochs,
                batch_size: self.config.batch_size,
                learning_rate: self.config.learning_rate,
            },
            &mut rng,
        )?;
        let final_loss = history.last().copied().unwrap_or_default();
        Ok((network, final_loss))
    }

    fn publish(&self, network: FeedForwardNetwork) {
        match serde_json::to_string(&network.to_parameters()) {
            Ok(blob) => {
                if let Err(error) = self.store.save_parameters(&blob) {
                    warn!(%error, "Failed to persist estimator parameters");
                }
            }
            Err(error) => warn!(%error, "Failed to serialize estimator parameters"),
        }
        *self.model.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(network));
    }
}
