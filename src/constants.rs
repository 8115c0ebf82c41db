// ABOUTME: Application constants re-exported from pierre-quest-core
// ABOUTME: Quest targets, rank thresholds, estimator hyperparameters and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_quest_core::constants::*;
