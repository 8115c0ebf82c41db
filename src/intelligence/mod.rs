// ABOUTME: Intelligence module re-exports from pierre-quest-intelligence crate
// ABOUTME: Keeps crate::intelligence paths stable for services and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Volume estimation, quest generation and progression rules. Everything here
//! lives in the `pierre-quest-intelligence` crate.

pub use pierre_quest_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::stats::assess)
pub use pierre_quest_intelligence::{
    config, dataset, error, estimator, knowledge_base, network, progression, quest_generator,
    random, recovery, stats,
};
