// ABOUTME: Configuration module for storage selection and intelligence tuning
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pierre Quest
//!
//! - **Environment**: `QuestConfig` parsed from `PIERRE_QUEST_*` variables
//! - **Intelligence**: estimator and generator settings, re-exported from
//!   `pierre-quest-intelligence`

/// Environment configuration
pub mod environment;

pub use crate::intelligence::{ConfigError, EstimatorConfig, GeneratorConfig, IntelligenceConfig};
pub use environment::{default_data_dir, QuestConfig, StoreBackend};
