// ABOUTME: Main library entry point for the Pierre quest engine
// ABOUTME: Gamified training core with adaptive daily quests, ranks and a local volume estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Quest
//!
//! Offline-first engine behind a gamified training app. A player onboards with
//! benchmark lifts, receives one daily quest scaled to their rank and recent
//! recovery, and ranks up by completing it. Every completion is logged and
//! retrains a small on-device regression model predicting next-session volume.
//!
//! ## Architecture
//!
//! - **Storage**: four JSON blobs behind a pluggable key-value backend
//! - **Intelligence**: estimator, quest generator and progression rules
//!   (re-exported from `pierre-quest-intelligence`)
//! - **Services**: profile and quest lifecycles plus background training
//! - **Config / Logging**: environment-driven settings and `tracing` output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use pierre_quest::config::QuestConfig;
//! use pierre_quest::errors::{AppError, AppResult};
//! use pierre_quest::resources::QuestResources;
//! use tokio::runtime::Handle;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config =
//!         QuestConfig::from_env().map_err(|error| AppError::config(error.to_string()))?;
//!     let resources = QuestResources::from_config(config, Some(Handle::current()));
//!
//!     let quests = resources.quest_service();
//!     let quest = quests.active_quest(Utc::now().date_naive(), &mut rand::thread_rng())?;
//!     println!("Today's quest: {} tasks, {} XP", quest.tasks.len(), quest.xp_reward);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error types
pub mod errors;

/// Estimator, quest generation and progression rules
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Shared resource container
pub mod resources;

/// Profile and quest services
pub mod services;

/// Local persistence
pub mod storage;
