// ABOUTME: Unified error types re-exported from pierre-quest-core
// ABOUTME: AppError, ErrorCode and the quest/storage domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_quest_core::errors::*;
