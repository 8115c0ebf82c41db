// ABOUTME: Environment configuration for storage backend selection and estimator/generator tuning
// ABOUTME: Parses PIERRE_QUEST_* variables into a validated QuestConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::intelligence::{ConfigError, EstimatorConfig, GeneratorConfig, IntelligenceConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Storage backend selector
pub const STORE_ENV: &str = "PIERRE_QUEST_STORE";
/// Data directory for the file backend
pub const DATA_DIR_ENV: &str = "PIERRE_QUEST_DATA_DIR";
/// Estimator seed
pub const MODEL_SEED_ENV: &str = "PIERRE_QUEST_MODEL_SEED";
/// Estimator epochs
pub const TRAINING_EPOCHS_ENV: &str = "PIERRE_QUEST_TRAINING_EPOCHS";
/// Estimator batch size
pub const BATCH_SIZE_ENV: &str = "PIERRE_QUEST_BATCH_SIZE";
/// Side quest offer probability
pub const SIDE_QUEST_CHANCE_ENV: &str = "PIERRE_QUEST_SIDE_QUEST_CHANCE";

/// Directory name under the platform data directory
const DATA_DIR_NAME: &str = "pierre-quest";

/// Which key-value backend holds the four persisted blobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One JSON file per key under the data directory
    #[default]
    File,
    /// Process-local map, lost on exit
    Memory,
    /// Storage unavailable; reads are empty and writes are dropped
    Disabled,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            "disabled" | "none" => Ok(Self::Disabled),
            other => Err(ConfigError::Parse(format!(
                "{STORE_ENV} must be file, memory or disabled (got {other})"
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Memory => "memory",
            Self::Disabled => "disabled",
        })
    }
}

/// Top-level quest engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestConfig {
    /// Storage backend
    pub store: StoreBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
    /// Estimator and generator settings
    pub intelligence: IntelligenceConfig,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::default(),
            data_dir: default_data_dir(),
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl QuestConfig {
    /// In-memory configuration with default tuning, for tests and ephemeral sessions
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: StoreBackend::Memory,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or the resulting
    /// configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        debug!("Loading quest configuration from environment variables");

        let defaults = EstimatorConfig::default();
        let estimator = EstimatorConfig {
            seed: parse_env_or(MODEL_SEED_ENV, defaults.seed)?,
            epochs: parse_env_or(TRAINING_EPOCHS_ENV, defaults.epochs)?,
            batch_size: parse_env_or(BATCH_SIZE_ENV, defaults.batch_size)?,
            ..defaults
        };
        let generator_defaults = GeneratorConfig::default();
        let generator = GeneratorConfig {
            side_quest_chance: parse_env_or(
                SIDE_QUEST_CHANCE_ENV,
                generator_defaults.side_quest_chance,
            )?,
            ..generator_defaults
        };

        let config = Self {
            store: parse_env_or(STORE_ENV, StoreBackend::default())?,
            data_dir: env::var(DATA_DIR_ENV).map_or_else(|_| default_data_dir(), PathBuf::from),
            intelligence: IntelligenceConfig {
                estimator,
                generator,
            },
        };

        config.validate()?;
        info!(
            store = %config.store,
            data_dir = %config.data_dir.display(),
            seed = config.intelligence.estimator.seed,
            "Quest configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any intelligence section is out of range or the file
    /// backend has an empty data directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store == StoreBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "data directory must not be empty for the file backend",
            ));
        }
        self.intelligence.validate()
    }
}

/// Platform data directory joined with `pierre-quest`, or `./pierre-quest`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Parse `key` if set, otherwise return `default`
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|error| ConfigError::Parse(format!("invalid {key} value {raw:?}: {error}"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(error) => Err(ConfigError::EnvVar(error)),
    }
}
