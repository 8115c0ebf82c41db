// ABOUTME: Core data models re-exported from pierre-quest-core
// ABOUTME: Re-exports Profile, DailyLog, Quest, RankLetter and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Profile`: player identity, benchmarks, stat block and rank
//! - `DailyLog`: one completed session with recovery inputs
//! - `Quest`: the active unit of work and its tasks
//! - `RankLetter`: E..S tier derived from a numeric rank

pub use pierre_quest_core::models::*;
