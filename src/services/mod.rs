// ABOUTME: Domain service layer for profile and quest lifecycles
// ABOUTME: Services own storage access and delegate rules to the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold no state of their own beyond handles to storage, the quest
//! generator and the estimator; every call reads current state from storage.

/// Onboarding, recalibration and status window
pub mod profile_service;

/// Quest state machine
pub mod quest_service;

/// Background estimator training
pub mod training;

pub use profile_service::{ProfileService, StatusWindow};
pub use quest_service::{QuestCompletion, QuestService};
pub use training::TrainingScheduler;
