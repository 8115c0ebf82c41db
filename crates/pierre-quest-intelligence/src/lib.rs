// ABOUTME: Quest intelligence engine: volume estimator, quest generation and progression rules
// ABOUTME: Pure domain logic over pierre-quest-core models; persistence is injected through traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Quest Intelligence
//!
//! Everything that decides what the player should do next:
//!
//! - **estimator**: small feed-forward regression network predicting next-session volume
//! - **`quest_generator`**: daily, penalty and side quests scaled to rank and recovery
//! - **stats**: stat block and starting rank from benchmark lifts
//! - **progression**: rank and stat rewards on quest completion
//! - **`knowledge_base`**: nutrition and habit lookup table

/// Estimator and generator configuration
pub mod config;

/// Training pair and feature construction
pub mod dataset;

/// Estimator error types
pub mod error;

/// Volume estimator with persisted parameters
pub mod estimator;

/// Nutrition and habit knowledge base
pub mod knowledge_base;

/// Dense network layers and Adam optimizer
pub mod network;

/// Quest reward application
pub mod progression;

/// Quest generation
pub mod quest_generator;

/// Injectable randomness
pub mod random;

/// Recovery readiness scoring
pub mod recovery;

/// Stat derivation from benchmarks
pub mod stats;

pub use config::{ConfigError, EstimatorConfig, GeneratorConfig, IntelligenceConfig};
pub use dataset::{FeatureVector, TrainingSet, VolumeQuery};
pub use error::EstimatorError;
pub use estimator::{ParameterStore, TrainingOutcome, VolumeEstimator};
pub use knowledge_base::{analyze_input, random_tip, KnowledgeItem};
pub use progression::apply_quest_reward;
pub use quest_generator::QuestGenerator;
pub use random::{RandomSource, ScriptedRandom};
pub use recovery::{is_poor_recovery, recovery_score};
pub use stats::{assess, StatAssessment};
