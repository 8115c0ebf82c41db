// ABOUTME: Configuration for the volume estimator and quest generator
// ABOUTME: Defaults come from core constants; validate() guards hyperparameter ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;

pub use error::ConfigError;

use pierre_quest_core::constants::{estimator, quest};
use serde::{Deserialize, Serialize};

/// Volume estimator hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Full passes over the training pairs
    pub epochs: usize,
    /// Samples per Adam step
    pub batch_size: usize,
    /// Adam learning rate
    pub learning_rate: f64,
    /// Dropout rate after the first hidden layer
    pub dropout_rate: f64,
    /// Logs required before training runs
    pub min_training_logs: usize,
    /// Seed for weight init, dropout masks and shuffling
    pub seed: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            epochs: estimator::EPOCHS,
            batch_size: estimator::BATCH_SIZE,
            learning_rate: estimator::LEARNING_RATE,
            dropout_rate: estimator::DROPOUT_RATE,
            min_training_logs: estimator::MIN_TRAINING_LOGS,
            seed: estimator::DEFAULT_SEED,
        }
    }
}

impl EstimatorConfig {
    /// Validate hyperparameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if epochs or batch size is zero, the learning rate is not
    /// positive, the dropout rate is outside `[0, 1)`, or fewer than two logs are
    /// required (one training pair needs two logs)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epochs == 0 {
            return Err(ConfigError::ValueOutOfRange("epochs must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ValueOutOfRange("batch_size must be at least 1"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "learning_rate must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.dropout_rate) {
            return Err(ConfigError::InvalidRange("dropout_rate must be in [0, 1)"));
        }
        if self.min_training_logs < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_training_logs must be at least 2",
            ));
        }
        Ok(())
    }
}

/// Quest generation policy knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Per-view probability of offering a side quest
    pub side_quest_chance: f64,
    /// Reward pool used when the profile has no favorite foods
    pub default_reward_foods: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            side_quest_chance: quest::SIDE_QUEST_CHANCE,
            default_reward_foods: quest::DEFAULT_REWARD_FOODS
                .iter()
                .map(|food| (*food).to_owned())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Validate policy values
    ///
    /// # Errors
    ///
    /// Returns an error if the side quest chance is outside `[0, 1]` or the
    /// default reward pool is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.side_quest_chance) {
            return Err(ConfigError::InvalidRange(
                "side_quest_chance must be in [0, 1]",
            ));
        }
        if self.default_reward_foods.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "default_reward_foods must not be empty",
            ));
        }
        Ok(())
    }
}

/// Combined intelligence configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Estimator hyperparameters
    pub estimator: EstimatorConfig,
    /// Quest generation policy
    pub generator: GeneratorConfig,
}

impl IntelligenceConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.estimator.validate()?;
        self.generator.validate()
    }
}
